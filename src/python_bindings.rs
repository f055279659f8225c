use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{AlignmentCosts, SubstringSearch};
use crate::error::Error;

fn to_py(err: Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Searcher selected by name from Python: "rabin_karp", "kmp", "z" or
/// "boyer_moore".
#[pyclass(name = "Searcher")]
struct PySearcher {
    inner: Box<dyn SubstringSearch + Send>,
}

#[pymethods]
impl PySearcher {
    #[new]
    fn new(pattern: &str, algorithm: &str) -> PyResult<Self> {
        let bytes = pattern.as_bytes();
        let inner: Box<dyn SubstringSearch + Send> = match algorithm {
            "rabin_karp" => Box::new(crate::RabinKarp::from_pattern(bytes)),
            "kmp" => Box::new(crate::Kmp::from_pattern(bytes)),
            "z" => Box::new(crate::ZSearch::from_pattern(bytes)),
            "boyer_moore" => Box::new(crate::BoyerMoore::from_pattern(bytes)),
            other => {
                return Err(PyValueError::new_err(format!("unknown algorithm {other:?}")));
            }
        };
        Ok(PySearcher { inner })
    }

    fn find(&self, text: &str) -> Option<usize> {
        self.inner.find(text.as_bytes())
    }

    fn find_all(&self, text: &str) -> Vec<usize> {
        self.inner.find_all(text.as_bytes())
    }
}

#[pyfunction]
fn rabin_karp(pattern: &str, text: &str, modulus: u64) -> PyResult<Option<usize>> {
    crate::rabin_karp(pattern, text, modulus).map_err(to_py)
}

#[pyfunction]
fn wildcard_match(text: &str, pattern: &str) -> bool {
    crate::wildcard_match(text, pattern)
}

#[pyfunction]
fn edit_distance(a: &str, b: &str) -> usize {
    crate::edit_distance(a, b)
}

#[pyfunction]
fn alignment_cost(a: &str, b: &str, mismatch: u32, gap: u32) -> u64 {
    crate::alignment_cost(a, b, AlignmentCosts { mismatch, gap })
}

#[pyfunction]
fn lcs_len(a: &str, b: &str) -> usize {
    crate::lcs_len(a.as_bytes(), b.as_bytes())
}

#[pyfunction]
fn longest_palindromic_substring(s: &str) -> String {
    crate::longest_palindromic_substring(s).to_string()
}

#[pyfunction]
fn word_break_all(s: &str, dict: Vec<String>) -> Vec<String> {
    crate::word_break_all(s, &dict)
}

#[pyfunction]
fn left_rotate(s: &str, k: usize) -> PyResult<String> {
    crate::left_rotate(s, k).map_err(to_py)
}

#[pymodule]
fn stralgo(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PySearcher>()?;
    m.add_function(wrap_pyfunction!(rabin_karp, m)?)?;
    m.add_function(wrap_pyfunction!(wildcard_match, m)?)?;
    m.add_function(wrap_pyfunction!(edit_distance, m)?)?;
    m.add_function(wrap_pyfunction!(alignment_cost, m)?)?;
    m.add_function(wrap_pyfunction!(lcs_len, m)?)?;
    m.add_function(wrap_pyfunction!(longest_palindromic_substring, m)?)?;
    m.add_function(wrap_pyfunction!(word_break_all, m)?)?;
    m.add_function(wrap_pyfunction!(left_rotate, m)?)?;
    Ok(())
}
