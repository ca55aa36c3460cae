use std::sync::Arc;

use crate::notify::Notifier;
use crate::store::CourseStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CourseStore>,
    pub notifier: Arc<dyn Notifier>,
}
