use std::sync::{Arc, Mutex};

use crate::dashboard::applications::domain::{Application, ApplicationId};
use crate::dashboard::applications::repository::{
    ApplicationRepository, ContactChannel, ContactError, ContactMessage, RepositoryError,
    RoleScope,
};
use crate::dashboard::applications::DashboardService;
use crate::dashboard::fixtures::seed_applications;

/// Order-preserving in-memory store backing the service tests.
#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<Vec<Application>>>,
}

impl ApplicationRepository for MemoryRepository {
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

#[derive(Default, Clone)]
pub(super) struct MemoryContacts {
    messages: Arc<Mutex<Vec<ContactMessage>>>,
}

impl MemoryContacts {
    pub(super) fn messages(&self) -> Vec<ContactMessage> {
        self.messages.lock().expect("contact mutex poisoned").clone()
    }
}

impl ContactChannel for MemoryContacts {
    fn send(&self, message: ContactMessage) -> Result<(), ContactError> {
        self.messages
            .lock()
            .expect("contact mutex poisoned")
            .push(message);
        Ok(())
    }
}

pub(super) fn build_service() -> (
    DashboardService<MemoryRepository, MemoryContacts>,
    Arc<MemoryRepository>,
    Arc<MemoryContacts>,
) {
    let repository = Arc::new(MemoryRepository::default());
    for application in seed_applications() {
        repository
            .insert(application)
            .expect("seed record inserts");
    }
    let contacts = Arc::new(MemoryContacts::default());
    let service = DashboardService::new(repository.clone(), contacts.clone());
    (service, repository, contacts)
}
