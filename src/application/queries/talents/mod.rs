mod get;
mod list;
mod service;

pub use get::GetTalentQuery;
pub use list::ListTalentsQuery;
pub use service::TalentQueryService;
