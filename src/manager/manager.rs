use std::cell::{
    Ref,
    RefCell,
    RefMut
};
use std::collections::HashMap;

use log::debug;

use crate::function::fractionalform::FractionalForm;
use crate::function::fractionalfunction::FractionalFunction;

use super::managererror::ManagerError;


pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn names(&self) -> Vec<String>;

    fn insert(&self, name: &str, value: V);

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        let elem_opt = map.get(name);
        elem_opt.map_or(
            Err(ManagerError::map_elem_not_found(name)),
            |elem| Ok(elem.clone())
        )
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn len(&self) -> usize {
        self.map().len()
    }
}


/// Name-keyed store that remembers insertion order.
pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    order_cell: RefCell<Vec<String>>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new() -> Manager<V> {
        Manager {
            map_cell: RefCell::new(HashMap::new()),
            order_cell: RefCell::new(Vec::new())
        }
    }

    pub fn order(&self) -> Ref<'_, Vec<String>> {
        self.order_cell.borrow()
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn names(&self) -> Vec<String> {
        self.order().clone()
    }

    fn insert(&self, name: &str, value: V) {
        let replaced = self.map().insert(name.to_owned(), value).is_some();
        if replaced {
            debug!("replaced '{}'", name);
        } else {
            self.order_cell.borrow_mut().push(name.to_owned());
            debug!("registered '{}'", name);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FunctionManager
// ─────────────────────────────────────────────────────────────────────────────

pub type FunctionManager = Manager<FractionalForm>;

impl Manager<FractionalForm> {
    pub fn evaluate(&self, name: &str, x: f64) -> Result<f64, ManagerError> {
        let function = self.get(name)?;
        Ok(function.evaluate(x)?)
    }

    pub fn functions(&self) -> Vec<(String, FractionalForm)> {
        let map = self.map();
        self.order()
            .iter()
            .filter_map(|name| map.get(name).map(|function| (name.clone(), *function)))
            .collect()
    }
}
