pub mod study_hierarchy_repository;

pub use study_hierarchy_repository::{InMemoryStudyHierarchyRepository, StudyHierarchyRepository};
