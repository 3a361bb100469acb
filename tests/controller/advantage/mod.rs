mod create;
mod list_for_student;
