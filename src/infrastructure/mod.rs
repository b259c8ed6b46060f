pub mod database;
pub mod repositories;
pub mod supabase;
pub mod time;
pub mod util;
