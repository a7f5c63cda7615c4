use std::sync::Arc;

use geocrypt_access::{
    file_access::application::acl::wfh_directory_facade_real_impl::WfhDirectoryFacadeRealImpl,
    work_from_home::application::{
        acl::work_from_home_facade_impl::WorkFromHomeFacadeImpl,
        command_services::work_from_home_command_service_impl::WorkFromHomeCommandServiceImpl,
        query_services::work_from_home_query_service_impl::WorkFromHomeQueryServiceImpl,
    },
};

use super::fakes::FakeWfhRequestRepository;

pub struct WorkFromHomeHarness {
    pub repository: Arc<FakeWfhRequestRepository>,
    pub command_service: Arc<WorkFromHomeCommandServiceImpl>,
    pub query_service: Arc<WorkFromHomeQueryServiceImpl>,
    pub facade: Arc<WorkFromHomeFacadeImpl>,
    pub directory: WfhDirectoryFacadeRealImpl,
}

pub fn create_harness() -> WorkFromHomeHarness {
    let repository = Arc::new(FakeWfhRequestRepository::new());
    let command_service = Arc::new(WorkFromHomeCommandServiceImpl::new(repository.clone()));
    let query_service = Arc::new(WorkFromHomeQueryServiceImpl::new(repository.clone()));
    let facade = Arc::new(WorkFromHomeFacadeImpl::new(query_service.clone()));
    let directory = WfhDirectoryFacadeRealImpl::new(facade.clone());

    WorkFromHomeHarness {
        repository,
        command_service,
        query_service,
        facade,
        directory,
    }
}
