//! Backend registry for looking up display backends.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::backends::{NvidiaBackend, XrandrBackend};
use super::traits::DisplayBackend;
use super::types::BackendType;

static REGISTRY: LazyLock<BackendRegistry> = LazyLock::new(BackendRegistry::new);

struct BackendRegistry {
    backends: HashMap<BackendType, Box<dyn DisplayBackend>>,
}

impl BackendRegistry {
    fn new() -> Self {
        let mut backends: HashMap<BackendType, Box<dyn DisplayBackend>> = HashMap::new();
        backends.insert(BackendType::Xrandr, Box::new(XrandrBackend));
        backends.insert(BackendType::Nvidia, Box::new(NvidiaBackend));
        Self { backends }
    }

    fn get_by_type(&self, backend_type: BackendType) -> Option<&dyn DisplayBackend> {
        self.backends.get(&backend_type).map(|b| b.as_ref())
    }
}

/// Get a reference to a display backend by type.
pub fn get_backend(backend_type: BackendType) -> Option<&'static dyn DisplayBackend> {
    REGISTRY.get_by_type(backend_type)
}

/// Get a reference to a display backend by name (case-insensitive).
pub fn get_backend_by_name(name: &str) -> Option<&'static dyn DisplayBackend> {
    BackendType::parse(name).and_then(get_backend)
}
