pub mod error;
pub mod history;
pub mod location;
pub mod pattern;
pub mod quizdom;
pub mod table;
pub mod view;

pub use error::RouterError;
pub use history::{HistoryEntry, NavigationTarget, Navigator, PendingNavigation};
pub use pattern::RoutePattern;
pub use table::{Resolution, RouteDefinition, RouteMatch, RouteTable};
pub use view::View;
