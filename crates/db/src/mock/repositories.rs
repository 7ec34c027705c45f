use async_trait::async_trait;
use mockall::mock;
use proffy_core::models::class::{ClassFilter, ClassListing, CreatedClass, NewClass};

use crate::store::ClassStore;

// Mock store for handler tests
mock! {
    pub ClassStore {}

    #[async_trait]
    impl ClassStore for ClassStore {
        async fn search_classes(&self, filter: &ClassFilter) -> eyre::Result<Vec<ClassListing>>;

        async fn create_class(&self, new_class: NewClass) -> eyre::Result<CreatedClass>;
    }
}
