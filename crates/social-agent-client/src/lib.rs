pub mod accounts;
pub mod engagement;
pub mod error;
pub mod fallback;
pub mod gateway;
pub mod service;
pub mod store;

pub use accounts::AccountBook;
pub use engagement::{EngagementGenerator, RandomEngagement, SeededEngagement};
pub use error::{ContentError, NetworkError};
pub use fallback::{Canned, FallbackRoute, FallbackTable, MethodMatch};
pub use gateway::{HttpGateway, Origin};
pub use service::{Connection, ContentService};
pub use store::{IdeaStore, Transition};
