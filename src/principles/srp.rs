//! Single responsibility: teaching, attendance and marks each have their own
//! owner, so a change to one cannot break the others.

use crate::announce::Announcer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectTeacher {
    subject: String,
}

impl SubjectTeacher {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn teach(&self, out: &mut dyn Announcer) {
        out.announce(&format!("Teaching {}", self.subject));
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AttendanceTracker;

impl AttendanceTracker {
    pub fn mark_attendance(&self, out: &mut dyn Announcer, subject: &str) {
        out.announce(&format!("Marking attendance for {subject}"));
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MarksManager;

impl MarksManager {
    pub fn assign_marks(&self, out: &mut dyn Announcer, subject: &str) {
        out.announce(&format!("Assigning marks for {subject}"));
    }
}

/// One lesson: teach, take attendance, grade. Three collaborators, one job each.
pub fn run_lesson(out: &mut dyn Announcer, subject: &str) {
    let teacher = SubjectTeacher::new(subject);
    let attendance = AttendanceTracker;
    let marks = MarksManager;

    teacher.teach(out);
    attendance.mark_attendance(out, teacher.subject());
    marks.assign_marks(out, teacher.subject());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_teacher_teaches_its_subject() {
        let mut out: Vec<String> = Vec::new();
        SubjectTeacher::new("Chemistry").teach(&mut out);
        assert_eq!(out, vec!["Teaching Chemistry"]);
    }

    #[test]
    fn test_attendance_and_marks_are_independent() {
        let mut out: Vec<String> = Vec::new();
        MarksManager.assign_marks(&mut out, "Art");
        AttendanceTracker.mark_attendance(&mut out, "Art");
        assert_eq!(out, vec!["Assigning marks for Art", "Marking attendance for Art"]);
    }

    #[test]
    fn test_run_lesson() {
        let mut out: Vec<String> = Vec::new();
        run_lesson(&mut out, "Mathematics");
        assert_eq!(
            out,
            vec![
                "Teaching Mathematics",
                "Marking attendance for Mathematics",
                "Assigning marks for Mathematics",
            ]
        );
    }
}
