use super::model;
use super::state::{HeapDumpAction, HeapDumpForm};
use crate::shared::http::{errors, GlooTransport};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for the heap dump form
///
/// Commands resolve with the operator message or reject with the error text;
/// the form signal carries the stored responses for rendering.
#[derive(Clone, Copy)]
pub struct HeapDumpViewModel {
    pub form: RwSignal<HeapDumpForm>,
    base_path: StoredValue<String>,
}

impl HeapDumpViewModel {
    pub fn new(base_path: String) -> Self {
        Self {
            form: RwSignal::new(HeapDumpForm::default()),
            base_path: StoredValue::new(base_path),
        }
    }

    pub fn load_defaults(&self) {
        let form = self.form;
        let base_path = self.base_path.get_value();
        spawn_local(async move {
            match model::fetch_defaults(&GlooTransport, &base_path).await {
                Ok(defaults) => {
                    let _ = form.try_update(|f| f.load_succeeded(defaults));
                }
                Err(e) => {
                    log::error!("Failed to load heap dump defaults: {}", e);
                    let _ = form.try_update(|f| f.load_failed(errors::describe(&e)));
                }
            }
        });
    }

    pub fn set_directory(&self, directory: String) {
        self.form.update(|f| f.directory = directory);
    }

    pub async fn check_disk_space(self, directory: String) -> Result<String, String> {
        if self.form.try_update(|f| f.begin(HeapDumpAction::CheckDiskSpace)) != Some(true) {
            return Err("Another action is still running".to_string());
        }
        let base_path = self.base_path.get_value();
        let result = model::check_disk_space(&GlooTransport, &base_path, &directory).await;
        self.form
            .try_update(|f| f.finish_check_disk_space(result))
            .unwrap_or_else(|| Err("View closed".to_string()))
    }

    pub async fn dump_heap(self, directory: String) -> Result<String, String> {
        if self.form.try_update(|f| f.begin(HeapDumpAction::DumpHeap)) != Some(true) {
            return Err("Another action is still running".to_string());
        }
        let base_path = self.base_path.get_value();
        log::info!("Dumping heap into {}", directory);
        let result = model::dump_heap(&GlooTransport, &base_path, &directory).await;
        self.form
            .try_update(|f| f.finish_dump_heap(result))
            .unwrap_or_else(|| Err("View closed".to_string()))
    }

    /// Button handler: fire and forget, outcome lands in the form
    pub fn check_disk_space_command(&self) {
        let vm = *self;
        let directory = self.form.with_untracked(|f| f.directory.clone());
        spawn_local(async move {
            if let Err(e) = vm.check_disk_space(directory).await {
                log::warn!("Disk space check failed: {}", e);
            }
        });
    }

    pub fn dump_heap_command(&self) {
        let vm = *self;
        let directory = self.form.with_untracked(|f| f.directory.clone());
        spawn_local(async move {
            if let Err(e) = vm.dump_heap(directory).await {
                log::warn!("Heap dump failed: {}", e);
            }
        });
    }
}
