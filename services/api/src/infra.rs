use metrics_exporter_prometheus::PrometheusHandle;
use rentboard::dashboard::applications::{
    Application, ApplicationId, ApplicationRepository, ContactChannel, ContactError,
    ContactMessage, RepositoryError, RoleScope,
};
use rentboard::dashboard::fixtures::seed_applications;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Order-preserving in-memory store standing behind the repository trait
/// until real persistence exists.
#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationRepository {
    records: Arc<Mutex<Vec<Application>>>,
}

impl InMemoryApplicationRepository {
    pub(crate) fn seeded() -> Self {
        let repository = Self::default();
        {
            let mut guard = repository
                .records
                .lock()
                .expect("repository mutex poisoned");
            guard.extend(seed_applications());
        }
        repository
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn insert(&self, application: Application) -> Result<Application, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.application_id == application.application_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(application.clone());
        Ok(application)
    }

    fn update(&self, application: Application) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard
            .iter_mut()
            .find(|existing| existing.application_id == application.application_id)
        {
            Some(slot) => {
                *slot = application;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|application| application.application_id == *id)
            .cloned())
    }

    fn list(&self, scope: &RoleScope) -> Result<Vec<Application>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .filter(|application| scope.covers(application))
            .cloned()
            .collect())
    }
}

/// Contact sink that records and logs what a real mail/SMS adapter would send.
#[derive(Default, Clone)]
pub(crate) struct InMemoryContactChannel {
    messages: Arc<Mutex<Vec<ContactMessage>>>,
}

impl InMemoryContactChannel {
    pub(crate) fn messages(&self) -> Vec<ContactMessage> {
        self.messages.lock().expect("contact mutex poisoned").clone()
    }
}

impl ContactChannel for InMemoryContactChannel {
    fn send(&self, message: ContactMessage) -> Result<(), ContactError> {
        info!(
            application_id = %message.application_id.0,
            recipient = ?message.recipient,
            "contact message recorded"
        );
        self.messages
            .lock()
            .expect("contact mutex poisoned")
            .push(message);
        Ok(())
    }
}
