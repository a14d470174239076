//! Conversions between Python objects and keyed items / edit operations
use crate::errors::EditError;
use crate::types::{EditOp, Keyed};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList, PyModule};

/// A Python object paired with its canonical key
pub struct PyItem {
    key: String,
    object: Py<PyAny>,
}

impl std::fmt::Debug for PyItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PyItem({})", self.key)
    }
}

impl Clone for PyItem {
    fn clone(&self) -> Self {
        // Py<PyAny> has no Clone; clone_ref needs the interpreter attached
        Python::attach(|py| PyItem {
            key: self.key.clone(),
            object: self.object.clone_ref(py),
        })
    }
}

impl Keyed for PyItem {
    type Key = String;

    fn key(&self) -> Self::Key {
        self.key.clone()
    }
}

/// Canonical key for a Python value: its `json.dumps(sort_keys=True)` text, so
/// equal dicts key the same whatever their insertion order
pub fn python_to_key<'py>(py: Python<'py>, obj: &Bound<'py, PyAny>) -> Result<String, EditError> {
    let json_mod = PyModule::import(py, "json")?;
    let dumps = json_mod.getattr("dumps")?;
    let kwargs = PyDict::new(py);
    kwargs.set_item("sort_keys", true)?;
    let dumped = dumps
        .call((obj,), Some(&kwargs))
        .map_err(|e| EditError::PythonError(format!("key is not JSON-serializable: {}", e)))?;

    dumped
        .extract::<String>()
        .map_err(|e| EditError::PythonError(e.to_string()))
}

/// Wrap Python objects as keyed items, keyed by `key_fn(obj)` or the object itself
pub fn py_items<'py>(
    py: Python<'py>,
    objects: &[Bound<'py, PyAny>],
    key_fn: Option<&Bound<'py, PyAny>>,
) -> Result<Vec<PyItem>, EditError> {
    objects
        .iter()
        .map(|obj| {
            let key = match key_fn {
                Some(f) => python_to_key(py, &f.call1((obj,))?)?,
                None => python_to_key(py, obj)?,
            };
            Ok(PyItem {
                key,
                object: obj.clone().unbind(),
            })
        })
        .collect()
}

fn items_to_pylist<'py>(py: Python<'py>, items: &[PyItem]) -> PyResult<Bound<'py, PyList>> {
    let list = PyList::empty(py);
    for item in items {
        list.append(item.object.bind(py))?;
    }
    Ok(list)
}

/// Convert an operation to the dict shape exposed to Python
pub fn op_to_pydict<'py>(py: Python<'py>, op: &EditOp<PyItem>) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("action", op.action().to_string())?;
    match op {
        EditOp::Splice {
            offset,
            before,
            after,
        } => {
            dict.set_item("offset", *offset)?;
            dict.set_item("before", items_to_pylist(py, before)?)?;
            dict.set_item("after", items_to_pylist(py, after)?)?;
        }
        EditOp::Move {
            offset,
            count,
            distance,
        } => {
            dict.set_item("offset", *offset)?;
            dict.set_item("count", *count)?;
            dict.set_item("distance", *distance)?;
        }
    }
    Ok(dict)
}
