pub mod grade;
pub mod instructor;
pub mod major;
pub mod registry;
pub mod student;
pub mod summary;
pub mod university;

pub use grade::Grade;
pub use instructor::{CourseLoad, Instructor, InstructorRegistry};
pub use major::{CourseFlag, CourseStatus, Major, MajorRegistry};
pub use student::{Student, StudentRegistry};
pub use summary::{InstructorSummary, MajorSummary, StudentSummary};
pub use university::University;
