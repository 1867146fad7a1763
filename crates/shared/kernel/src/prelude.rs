pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::effect::Effect;
pub use crate::error::{StoreError, StoreErrorExt};
pub use crate::escape::escape_html;
pub use crate::event::{Key, PageEvent};
pub use crate::feature::{Context, Feature};
pub use crate::page::{Capabilities, Element, NodeId, Page, Rect, Viewport};
pub use crate::scheduler::{Scheduler, TaskId};
pub use crate::store::{KeyValueStore, MemoryStore};
pub use fam_domain::features::FeatureKind;
