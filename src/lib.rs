//! Keyed list reconciliation: the splice/move edits that turn one ordered
//! sequence of keyed items into another.
//!
//! Items are matched by key, with duplicate keys paired by ordinal occurrence.
//! Surviving items are moved rather than deleted and re-inserted. The result is
//! simple rather than optimal: no attempt is made to minimise the number of
//! operations or moves.
//!
//! ```
//! use list_reconciler::{EditScript, Mirror};
//!
//! let input = vec!["a", "b", "c"];
//! let output = vec!["d", "c", "b"];
//!
//! let script = EditScript::record(&input, &output);
//! let mut mirror = Mirror::new(input);
//! for op in &script {
//!     mirror.apply(op).unwrap();
//! }
//! assert_eq!(mirror.into_inner(), output);
//! ```
mod diff_engine;
mod errors;
mod mirror;
mod resolver;
mod script;
mod types;

#[cfg(feature = "python-bindings")]
mod converters;

pub use diff_engine::{DiffEngine, EditSink, edits, edits_into};
pub use errors::EditError;
pub use mirror::Mirror;
pub use script::EditScript;
pub use types::{EditOp, Keyed, OpAction};

#[cfg(feature = "python-bindings")]
mod python {
    use crate::converters::{op_to_pydict, py_items};
    use crate::script::EditScript;
    use crate::types::OpAction;
    use pyo3::prelude::*;
    use pyo3::types::PyList;

    /// edits(input, output, key=None) -> list[dict]
    #[pyfunction]
    #[pyo3(name = "edits", signature = (input, output, key=None))]
    fn py_edits<'py>(
        py: Python<'py>,
        input: Vec<Bound<'py, PyAny>>,
        output: Vec<Bound<'py, PyAny>>,
        key: Option<Bound<'py, PyAny>>,
    ) -> PyResult<Bound<'py, PyList>> {
        let input = py_items(py, &input, key.as_ref())?;
        let output = py_items(py, &output, key.as_ref())?;

        let script = EditScript::record(&input, &output);
        log::debug!("list_reconciler: {} ops emitted for Python caller", script.len());

        let ops = PyList::empty(py);
        for op in &script {
            ops.append(op_to_pydict(py, op)?)?;
        }
        Ok(ops)
    }

    fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(py_edits, m)?)?;

        // Export op actions as constants
        m.add("SPLICE", OpAction::Splice.to_string())?;
        m.add("MOVE", OpAction::Move.to_string())?;

        Ok(())
    }

    #[pymodule]
    fn list_reconciler(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
        register(m)
    }

}
