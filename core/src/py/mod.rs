// Tynt PyO3-lag over JSON-grensesnittet. Alt av logikk ligger i kjernen.
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::error::ChartError;
use crate::json::{prepare_view_json, summarize_range_json};

fn to_py_err(e: ChartError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// `{ samples, sport, units?, zoom?, start_time?, config? }` -> `{ chart, summary, zoom_summary? }`
#[pyfunction]
fn prepare_activity_view_json(json_in: &str) -> PyResult<String> {
    prepare_view_json(json_in).map_err(to_py_err)
}

/// `{ samples, sport, units?, zoom? }` -> sammendrag for vinduet
#[pyfunction]
fn summarize_range(json_in: &str) -> PyResult<String> {
    summarize_range_json(json_in).map_err(to_py_err)
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn activity_chart_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(prepare_activity_view_json, m)?)?;
    m.add_function(wrap_pyfunction!(summarize_range, m)?)?;
    Ok(())
}
