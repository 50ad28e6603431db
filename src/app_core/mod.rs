mod app;
pub use app::Recite;
