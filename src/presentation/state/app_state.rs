use std::sync::Arc;

use crate::application::ports::GenerativeModel;
use crate::application::services::AnalysisService;
use crate::presentation::config::Settings;

pub struct AppState<M>
where
    M: GenerativeModel,
{
    pub analysis_service: Arc<AnalysisService<M>>,
    pub settings: Settings,
}

impl<M> Clone for AppState<M>
where
    M: GenerativeModel,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
            settings: self.settings.clone(),
        }
    }
}
