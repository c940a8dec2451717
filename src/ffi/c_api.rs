//! C-compatible FFI bindings.
//!
//! A graph handle is an opaque pointer returned by `adjm_graph_create` and
//! released by `adjm_graph_destroy`. A NULL handle is accepted everywhere:
//! queries report `0` (false) or `-1`, mutations do nothing. Passing a handle
//! to `adjm_graph_destroy` twice is undefined behaviour.
//!
//! The `adjm_u_*` functions operate on undirected handles and the `adjm_d_*`
//! functions on directed handles; a handle of the other kind is treated as
//! invalid.

use std::ffi::c_void;
use std::io::Write;

use crate::format::{write_dot, write_matrix};
use crate::graph::{Digraph, Graph, SimpleGraph, UGraph};

const ADJM_INVALID: i32 = -1;

/// Create a graph with `num_nodes` nodes. Returns handle or NULL on failure.
#[no_mangle]
pub extern "C" fn adjm_graph_create(num_nodes: u32, is_directed: u8) -> *mut c_void {
    std::panic::catch_unwind(|| match Graph::new(num_nodes as usize, is_directed != 0) {
        Ok(graph) => Box::into_raw(Box::new(graph)) as *mut c_void,
        Err(e) => {
            eprintln!("{}", e);
            std::ptr::null_mut()
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a graph handle. NULL is ignored.
///
/// # Safety
///
/// `graph` must be NULL or a handle from `adjm_graph_create` that has not
/// already been destroyed.
#[no_mangle]
pub unsafe extern "C" fn adjm_graph_destroy(graph: *mut c_void) {
    if !graph.is_null() {
        let _ = std::panic::catch_unwind(|| unsafe {
            drop(Box::from_raw(graph as *mut Graph));
        });
    }
}

/// Number of nodes, or -1 for a NULL handle.
///
/// # Safety
///
/// `graph` must be NULL or a live handle from `adjm_graph_create`.
#[no_mangle]
pub unsafe extern "C" fn adjm_graph_node_count(graph: *mut c_void) -> i32 {
    std::panic::catch_unwind(|| match unsafe { graph_ref(graph) } {
        Some(g) => clamp_count(g.node_count()),
        None => ADJM_INVALID,
    })
    .unwrap_or(ADJM_INVALID)
}

/// 1 if `u` is a node of the graph, 0 otherwise (including NULL).
///
/// # Safety
///
/// `graph` must be NULL or a live handle from `adjm_graph_create`.
#[no_mangle]
pub unsafe extern "C" fn adjm_graph_has_node(graph: *mut c_void, u: u32) -> i32 {
    std::panic::catch_unwind(|| {
        unsafe { graph_ref(graph) }.is_some_and(|g| g.has_node(u as usize)) as i32
    })
    .unwrap_or(0)
}

/// 1 for a directed graph, 0 for undirected, -1 for NULL.
///
/// # Safety
///
/// `graph` must be NULL or a live handle from `adjm_graph_create`.
#[no_mangle]
pub unsafe extern "C" fn adjm_graph_is_directed(graph: *mut c_void) -> i32 {
    std::panic::catch_unwind(|| match unsafe { graph_ref(graph) } {
        Some(g) => g.is_directed() as i32,
        None => ADJM_INVALID,
    })
    .unwrap_or(ADJM_INVALID)
}

// ==================== Undirected ====================

/// 1 if the undirected edge `{u, v}` is present, 0 otherwise.
///
/// # Safety
///
/// `graph` must be NULL or a live handle from `adjm_graph_create`.
#[no_mangle]
pub unsafe extern "C" fn adjm_u_has_edge(graph: *mut c_void, u: u32, v: u32) -> i32 {
    std::panic::catch_unwind(|| {
        unsafe { ugraph_ref(graph) }.is_some_and(|g| g.has_edge(u as usize, v as usize)) as i32
    })
    .unwrap_or(0)
}

/// Add the undirected edge `{u, v}`. Invalid requests are ignored.
///
/// # Safety
///
/// `graph` must be NULL or a live handle from `adjm_graph_create`.
#[no_mangle]
pub unsafe extern "C" fn adjm_u_add_edge(graph: *mut c_void, u: u32, v: u32) {
    let _ = std::panic::catch_unwind(|| {
        if let Some(g) = unsafe { ugraph_mut(graph) } {
            g.add_edge(u as usize, v as usize);
        }
    });
}

/// Remove the undirected edge `{u, v}`. Invalid requests are ignored.
///
/// # Safety
///
/// `graph` must be NULL or a live handle from `adjm_graph_create`.
#[no_mangle]
pub unsafe extern "C" fn adjm_u_remove_edge(graph: *mut c_void, u: u32, v: u32) {
    let _ = std::panic::catch_unwind(|| {
        if let Some(g) = unsafe { ugraph_mut(graph) } {
            g.remove_edge(u as usize, v as usize);
        }
    });
}

/// Number of undirected edges, or -1 for an invalid handle.
///
/// # Safety
///
/// `graph` must be NULL or a live handle from `adjm_graph_create`.
#[no_mangle]
pub unsafe extern "C" fn adjm_u_edge_count(graph: *mut c_void) -> i32 {
    std::panic::catch_unwind(|| match unsafe { ugraph_ref(graph) } {
        Some(g) => clamp_count(g.edge_count()),
        None => ADJM_INVALID,
    })
    .unwrap_or(ADJM_INVALID)
}

/// Print the symmetric adjacency matrix to stdout.
///
/// # Safety
///
/// `graph` must be NULL or a live handle from `adjm_graph_create`.
#[no_mangle]
pub unsafe extern "C" fn adjm_u_print_matrix(graph: *mut c_void) {
    let _ = std::panic::catch_unwind(|| {
        if let Some(g) = unsafe { ugraph_ref(graph) } {
            print_with(|out| write_matrix(g, out));
        }
    });
}

/// Print the DOT description to stdout.
///
/// # Safety
///
/// `graph` must be NULL or a live handle from `adjm_graph_create`.
#[no_mangle]
pub unsafe extern "C" fn adjm_u_print_dot(graph: *mut c_void) {
    let _ = std::panic::catch_unwind(|| {
        if let Some(g) = unsafe { ugraph_ref(graph) } {
            print_with(|out| write_dot(g, out));
        }
    });
}

// ==================== Directed ====================

/// 1 if the arc `u -> v` is present, 0 otherwise.
///
/// # Safety
///
/// `graph` must be NULL or a live handle from `adjm_graph_create`.
#[no_mangle]
pub unsafe extern "C" fn adjm_d_has_edge(graph: *mut c_void, u: u32, v: u32) -> i32 {
    std::panic::catch_unwind(|| {
        unsafe { digraph_ref(graph) }.is_some_and(|g| g.has_edge(u as usize, v as usize)) as i32
    })
    .unwrap_or(0)
}

/// Add the arc `u -> v`. Invalid requests are ignored.
///
/// # Safety
///
/// `graph` must be NULL or a live handle from `adjm_graph_create`.
#[no_mangle]
pub unsafe extern "C" fn adjm_d_add_edge(graph: *mut c_void, u: u32, v: u32) {
    let _ = std::panic::catch_unwind(|| {
        if let Some(g) = unsafe { digraph_mut(graph) } {
            g.add_edge(u as usize, v as usize);
        }
    });
}

/// Remove the arc `u -> v`. Invalid requests are ignored.
///
/// # Safety
///
/// `graph` must be NULL or a live handle from `adjm_graph_create`.
#[no_mangle]
pub unsafe extern "C" fn adjm_d_remove_edge(graph: *mut c_void, u: u32, v: u32) {
    let _ = std::panic::catch_unwind(|| {
        if let Some(g) = unsafe { digraph_mut(graph) } {
            g.remove_edge(u as usize, v as usize);
        }
    });
}

/// Number of arcs, or -1 for an invalid handle.
///
/// # Safety
///
/// `graph` must be NULL or a live handle from `adjm_graph_create`.
#[no_mangle]
pub unsafe extern "C" fn adjm_d_edge_count(graph: *mut c_void) -> i32 {
    std::panic::catch_unwind(|| match unsafe { digraph_ref(graph) } {
        Some(g) => clamp_count(g.edge_count()),
        None => ADJM_INVALID,
    })
    .unwrap_or(ADJM_INVALID)
}

/// Print the adjacency matrix to stdout.
///
/// # Safety
///
/// `graph` must be NULL or a live handle from `adjm_graph_create`.
#[no_mangle]
pub unsafe extern "C" fn adjm_d_print_matrix(graph: *mut c_void) {
    let _ = std::panic::catch_unwind(|| {
        if let Some(g) = unsafe { digraph_ref(graph) } {
            print_with(|out| write_matrix(g, out));
        }
    });
}

/// Print the DOT description to stdout.
///
/// # Safety
///
/// `graph` must be NULL or a live handle from `adjm_graph_create`.
#[no_mangle]
pub unsafe extern "C" fn adjm_d_print_dot(graph: *mut c_void) {
    let _ = std::panic::catch_unwind(|| {
        if let Some(g) = unsafe { digraph_ref(graph) } {
            print_with(|out| write_dot(g, out));
        }
    });
}

// ==================== Helpers ====================

unsafe fn graph_ref<'a>(graph: *mut c_void) -> Option<&'a Graph> {
    unsafe { (graph as *const Graph).as_ref() }
}

unsafe fn graph_mut<'a>(graph: *mut c_void) -> Option<&'a mut Graph> {
    unsafe { (graph as *mut Graph).as_mut() }
}

unsafe fn ugraph_ref<'a>(graph: *mut c_void) -> Option<&'a UGraph> {
    unsafe { graph_ref(graph) }.and_then(Graph::as_undirected)
}

unsafe fn ugraph_mut<'a>(graph: *mut c_void) -> Option<&'a mut UGraph> {
    unsafe { graph_mut(graph) }.and_then(Graph::as_undirected_mut)
}

unsafe fn digraph_ref<'a>(graph: *mut c_void) -> Option<&'a Digraph> {
    unsafe { graph_ref(graph) }.and_then(Graph::as_directed)
}

unsafe fn digraph_mut<'a>(graph: *mut c_void) -> Option<&'a mut Digraph> {
    unsafe { graph_mut(graph) }.and_then(Graph::as_directed_mut)
}

fn clamp_count(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

fn print_with(render: impl FnOnce(&mut std::io::StdoutLock<'static>) -> crate::GraphResult<()>) {
    let mut out = std::io::stdout().lock();
    if let Err(e) = render(&mut out) {
        log::error!("Failed to print graph: {}", e);
    }
    let _ = out.flush();
}
