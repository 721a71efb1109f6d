use cqlorm::Value;
use std::sync::{Arc, Mutex};

/// One statement sent to a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Executed {
    pub cql: String,
    pub params: Vec<Value>,

    /// True when sent through `query` rather than `execute`
    pub query: bool,
}

/// A handle to the statements recorded by a session.
#[derive(Debug, Clone, Default)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<Executed>>>,
}

impl ExecLog {
    pub(crate) fn push(&self, cql: &str, params: &[Value], query: bool) {
        self.ops.lock().unwrap().push(Executed {
            cql: cql.to_string(),
            params: params.to_vec(),
            query,
        });
    }

    /// Get the number of logged statements
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// All statements in execution order
    pub fn statements(&self) -> Vec<Executed> {
        self.ops.lock().unwrap().clone()
    }

    /// The CQL text of every statement in execution order
    pub fn cql(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .map(|op| op.cql.clone())
            .collect()
    }

    /// Remove and return the oldest statement
    #[track_caller]
    pub fn pop(&self) -> Executed {
        let mut ops = self.ops.lock().unwrap();
        assert!(!ops.is_empty(), "no statement was executed");
        ops.remove(0)
    }

    /// Clear the log
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }
}
