use std::cell::{
    Ref,
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::samplegrid::{
    SampleGrid,
    SampleGridJsonProp
};
use crate::membership::membershipfunction::MembershipFunction;
use crate::membership::membershipfunctionmanager::MembershipFunctionManager;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    grid: Option<SampleGridJsonProp>,
    #[serde(default)]
    membership_function: Vec<serde_json::Value>
}

/// 取樣網格與具名參數預設組。
///
/// ```json
/// {
///     "grid": {"start": 0.0, "end": 10.0, "points": 1000},
///     "membership_function": [
///         {"name": "medium", "function_type": "Triangular", "a": 2.0, "b": 5.0, "c": 8.0}
///     ]
/// }
/// ```
///
/// `grid` 可省略，預設為 [0, 10] 上 1000 點。
pub struct Configuration {
    grid_cell: RefCell<Arc<SampleGrid>>,
    membership_function_manager_cell: RefCell<Manager<Arc<dyn MembershipFunction>>>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            grid_cell: RefCell::new(Arc::new(SampleGrid::default())),
            membership_function_manager_cell: RefCell::new(MembershipFunctionManager::new())
        }
    }

    pub fn grid(&self) -> Arc<SampleGrid> {
        Arc::clone(&self.grid_cell.borrow())
    }

    pub fn membership_function_manager(&self) -> RefMut<'_, Manager<Arc<dyn MembershipFunction>>> {
        self.membership_function_manager_cell.borrow_mut()
    }

    pub fn preset_names(&self) -> Vec<String> {
        let manager: Ref<'_, Manager<Arc<dyn MembershipFunction>>> = self.membership_function_manager_cell.borrow();
        manager.names()
    }

    pub fn from_reader(&self, file_path: &Path) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        self.load(BufReader::new(file))?;
        log::info!(
            "loaded configuration from {}: {} presets, {} grid points",
            file_path.display(),
            self.membership_function_manager_cell.borrow().len(),
            self.grid_cell.borrow().len()
        );
        Ok(())
    }

    pub fn load_str(&self, json_str: &str) -> Result<(), ManagerError> {
        self.load(json_str.as_bytes())
    }

    /// 網格與所有預設組都建好才寫入；任何一步失敗時設定維持原狀。
    fn load<R: Read>(&self, reader: R) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let grid = json_prop.grid.map(|grid_prop| grid_prop.to_grid()).transpose()?;
        let membership_function_manager = self.membership_function_manager_cell.borrow();
        let named_membership_functions =
            membership_function_manager.named_objs_from_json_vec(&json_prop.membership_function)?;
        if let Some(grid) = grid {
            *self.grid_cell.borrow_mut() = Arc::new(grid);
        }
        membership_function_manager.insert_named_objs(named_membership_functions);
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}
