use mockable::Clock;
use std::sync::Arc;

pub type DynClock = Arc<dyn Clock + Send + Sync>;
