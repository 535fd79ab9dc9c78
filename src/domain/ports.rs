use crate::domain::model::ModuleDescriptor;
use crate::utils::error::Result;

/// Read-only access to a module's about text.
pub trait AboutModule: Send + Sync {
    fn about_module(&self) -> &str;

    fn descriptor(&self) -> Result<ModuleDescriptor> {
        ModuleDescriptor::parse(self.about_module())
    }
}
