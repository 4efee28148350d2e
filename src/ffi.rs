use std::ffi::CStr;

use libc::{c_char, c_int};
use ordered_float::OrderedFloat;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::directed::DirectedGraph;
use crate::{Dial, Dijkstra, Error};

pub const SSSP_OK: c_int = 0;
pub const SSSP_ERR_NULL: c_int = -1;
pub const SSSP_ERR_UTF8: c_int = -2;
pub const SSSP_ERR_DUPLICATE_VERTEX: c_int = -3;
pub const SSSP_ERR_UNKNOWN_VERTEX: c_int = -4;
pub const SSSP_ERR_UNKNOWN_SOURCE: c_int = -5;
pub const SSSP_ERR_INVALID_WEIGHT: c_int = -6;
pub const SSSP_ERR_BUCKET_RANGE: c_int = -7;
pub const SSSP_ERR_COST_OVERFLOW: c_int = -8;

/// Opaque handle; C only ever holds a pointer to it
pub struct FfiGraph {
    graph: DirectedGraph<String, OrderedFloat<f64>>,
}

/// Arrays indexed by vertex insertion order
#[repr(C)]
pub struct FfiResult {
    /// `INFINITY` for unreachable vertices
    pub costs: *mut f64,
    /// `usize::MAX` when there is no predecessor
    pub predecessors: *mut usize,
    pub len: usize,
    pub status: c_int,
}

fn status_of(err: &Error) -> c_int {
    match err {
        Error::DuplicateVertex(_) => SSSP_ERR_DUPLICATE_VERTEX,
        Error::UnknownVertex(_) => SSSP_ERR_UNKNOWN_VERTEX,
        Error::UnknownSource(_) => SSSP_ERR_UNKNOWN_SOURCE,
        Error::InvalidWeight(_) => SSSP_ERR_INVALID_WEIGHT,
        Error::BucketRangeExceeded { .. } | Error::BucketRangeOverflow { .. } => SSSP_ERR_BUCKET_RANGE,
        Error::CostOverflow { .. } => SSSP_ERR_COST_OVERFLOW,
    }
}

/// Reads a label, or the status code explaining why it can't be read
unsafe fn label(ptr: *const c_char) -> Result<String, c_int> {
    if ptr.is_null() {
        return Err(SSSP_ERR_NULL);
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map(str::to_owned)
        .map_err(|_| SSSP_ERR_UTF8)
}

#[no_mangle]
pub extern "C" fn sssp_graph_new() -> *mut FfiGraph {
    Box::into_raw(Box::new(FfiGraph {
        graph: DirectedGraph::new(),
    }))
}

#[no_mangle]
pub extern "C" fn sssp_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

#[no_mangle]
pub extern "C" fn sssp_graph_add_vertex(g: *mut FfiGraph, id: *const c_char) -> c_int {
    if g.is_null() {
        return SSSP_ERR_NULL;
    }
    let id = match unsafe { label(id) } {
        Ok(id) => id,
        Err(status) => return status,
    };
    match unsafe { &mut *g }.graph.add_vertex(id) {
        Ok(_) => SSSP_OK,
        Err(err) => status_of(&err),
    }
}

#[no_mangle]
pub extern "C" fn sssp_graph_add_edge(
    g: *mut FfiGraph,
    from: *const c_char,
    to: *const c_char,
    weight: f64,
) -> c_int {
    if g.is_null() {
        return SSSP_ERR_NULL;
    }
    let (from, to) = match unsafe { (label(from), label(to)) } {
        (Ok(from), Ok(to)) => (from, to),
        (Err(status), _) | (_, Err(status)) => return status,
    };
    match unsafe { &mut *g }
        .graph
        .add_edge(&from, &to, OrderedFloat(weight))
    {
        Ok(_) => SSSP_OK,
        Err(err) => status_of(&err),
    }
}

fn into_ffi(
    graph: &DirectedGraph<String, OrderedFloat<f64>>,
    result: crate::Result<ShortestPathResult<String, OrderedFloat<f64>>>,
) -> *mut FfiResult {
    let result = match result {
        Ok(result) => result,
        Err(err) => {
            return Box::into_raw(Box::new(FfiResult {
                costs: std::ptr::null_mut(),
                predecessors: std::ptr::null_mut(),
                len: 0,
                status: status_of(&err),
            }))
        }
    };

    let len = result.entries.len();
    let costs: Box<[f64]> = result
        .entries
        .iter()
        .map(|e| e.cost.map(|c| c.into_inner()).unwrap_or(f64::INFINITY))
        .collect();
    let predecessors: Box<[usize]> = result
        .entries
        .iter()
        .map(|e| {
            e.predecessor
                .as_ref()
                .and_then(|p| graph.vertex_id(p))
                .map(|p| p.index())
                .unwrap_or(usize::MAX)
        })
        .collect();

    Box::into_raw(Box::new(FfiResult {
        costs: Box::into_raw(costs) as *mut f64,
        predecessors: Box::into_raw(predecessors) as *mut usize,
        len,
        status: SSSP_OK,
    }))
}

#[no_mangle]
pub extern "C" fn sssp_run_dijkstra(g: *mut FfiGraph, source: *const c_char) -> *mut FfiResult {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let graph = unsafe { &mut (*g).graph };
    let result = unsafe { label(source) }
        .map_err(|_| Error::UnknownSource("<unreadable label>".to_string()))
        .and_then(|source| Dijkstra::new().run(graph, &source));
    into_ffi(graph, result)
}

#[no_mangle]
pub extern "C" fn sssp_run_dial(
    g: *mut FfiGraph,
    source: *const c_char,
    max_edge_weight: u64,
) -> *mut FfiResult {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let graph = unsafe { &mut (*g).graph };
    let result = unsafe { label(source) }
        .map_err(|_| Error::UnknownSource("<unreadable label>".to_string()))
        .and_then(|source| Dial::new(max_edge_weight).run(graph, &source));
    into_ffi(graph, result)
}

#[no_mangle]
pub extern "C" fn sssp_result_status(res: *const FfiResult) -> c_int {
    if res.is_null() {
        return SSSP_ERR_NULL;
    }
    unsafe { (*res).status }
}

#[no_mangle]
pub extern "C" fn sssp_result_free(res: *mut FfiResult) {
    if !res.is_null() {
        unsafe {
            let len = (*res).len;
            if !(*res).costs.is_null() {
                drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut((*res).costs, len)));
            }
            if !(*res).predecessors.is_null() {
                drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    (*res).predecessors,
                    len,
                )));
            }
            drop(Box::from_raw(res));
        }
    }
}
