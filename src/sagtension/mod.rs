mod converter;
mod line_reloader;
mod loader;
mod reloader;
mod sagger;
mod unloader;

pub use converter::LineCableToCatenaryConverter;
pub use line_reloader::{LineCableReloadResult, LineCableReloader};
pub use loader::CatenaryCableLoader;
pub use reloader::CatenaryCableReloader;
pub use sagger::{LineCableSagger, SagPoint};
pub use unloader::CatenaryCableUnloader;
