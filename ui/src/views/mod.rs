mod section;
pub use section::SectionPage;
