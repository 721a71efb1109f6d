//! Scripted stand-ins for [`Table`](crate::Table).
//!
//! A [`MockSession`] holds one queue of expectations shared by every
//! [`MockTable`] created from it. Each call pops the next expectation,
//! asserts that the operation and input match, and returns the scripted
//! outcome.
//!
//! ```
//! use cqlorm::{mock::MockSession, Orm};
//!
//! #[derive(Debug, Default, Clone, PartialEq, cqlorm::Model)]
//! struct Person {
//!     #[cql("pk")]
//!     name: String,
//!     age: i32,
//! }
//!
//! let session = MockSession::new();
//! let people = session.table::<Person>();
//!
//! let tony = Person { name: "Tony".into(), age: 30 };
//! people.expect_select(tony.clone(), vec![tony.clone()]);
//!
//! assert_eq!(people.select(&tony).unwrap(), vec![tony]);
//! session.verify();
//! ```

use crate::{Orm, Result};

use std::{
    any::Any,
    collections::VecDeque,
    fmt,
    marker::PhantomData,
    sync::{Mutex, PoisonError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Insert,
    Select,
    Update,
    Delete,
}

struct Expectation<T> {
    op: Op,
    input: T,
    outcome: Outcome<T>,
}

enum Outcome<T> {
    Rows(Vec<T>),
    Done(Result<()>),
}

/// The expectation queue shared by mock tables.
#[derive(Default)]
pub struct MockSession {
    expectations: Mutex<VecDeque<Box<dyn Any + Send>>>,
}

impl MockSession {
    pub fn new() -> MockSession {
        MockSession::default()
    }

    pub fn table<T>(&self) -> MockTable<'_, T> {
        MockTable {
            session: self,
            _p: PhantomData,
        }
    }

    /// Number of expectations not consumed yet.
    pub fn remaining(&self) -> usize {
        self.queue().len()
    }

    /// Panics if any expectation was not consumed.
    #[track_caller]
    pub fn verify(&self) {
        let remaining = self.remaining();
        assert!(remaining == 0, "{remaining} expected queries were never made");
    }

    fn queue(&self) -> std::sync::MutexGuard<'_, VecDeque<Box<dyn Any + Send>>> {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn push<T: Send + 'static>(&self, expectation: Expectation<T>) {
        self.queue().push_back(Box::new(expectation));
    }

    #[track_caller]
    fn pop<T: 'static>(&self, op: Op) -> Expectation<T> {
        let next = self.queue().pop_front();

        let Some(next) = next else {
            panic!("unexpected query: {op:?} with no remaining expectation");
        };

        match next.downcast::<Expectation<T>>() {
            Ok(expectation) => *expectation,
            Err(_) => panic!(
                "unexpected query: {op:?} on `{}` but the next expectation is for another type",
                std::any::type_name::<T>()
            ),
        }
    }
}

impl fmt::Debug for MockSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockSession")
            .field("remaining", &self.remaining())
            .finish()
    }
}

/// A mock of [`Table`](crate::Table) for the record type `T`.
pub struct MockTable<'a, T> {
    session: &'a MockSession,
    _p: PhantomData<fn() -> T>,
}

impl<T> MockTable<'_, T>
where
    T: fmt::Debug + PartialEq + Send + 'static,
{
    /// The next call must be `select(input)`; it returns `rows`.
    pub fn expect_select(&self, input: T, rows: Vec<T>) {
        self.expect(Op::Select, input, Outcome::Rows(rows));
    }

    /// The next call must be `insert(input)`; it returns `result`.
    pub fn expect_insert(&self, input: T, result: Result<()>) {
        self.expect(Op::Insert, input, Outcome::Done(result));
    }

    /// The next call must be `update(input)`; it returns `result`.
    pub fn expect_update(&self, input: T, result: Result<()>) {
        self.expect(Op::Update, input, Outcome::Done(result));
    }

    /// The next call must be `delete(input)`; it returns `result`.
    pub fn expect_delete(&self, input: T, result: Result<()>) {
        self.expect(Op::Delete, input, Outcome::Done(result));
    }

    fn expect(&self, op: Op, input: T, outcome: Outcome<T>) {
        self.session.push(Expectation { op, input, outcome });
    }

    #[track_caller]
    fn call(&self, op: Op, record: &T) -> Outcome<T> {
        let expectation = self.session.pop::<T>(op);

        assert_eq!(
            expectation.op, op,
            "unexpected query: {op:?} while {:?} was expected",
            expectation.op
        );
        assert_eq!(&expectation.input, record, "unexpected {op:?} input");

        expectation.outcome
    }

    #[track_caller]
    fn done(&self, op: Op, record: &T) -> Result<()> {
        match self.call(op, record) {
            Outcome::Done(result) => result,
            Outcome::Rows(_) => Ok(()),
        }
    }
}

impl<T> Orm<T> for MockTable<'_, T>
where
    T: fmt::Debug + PartialEq + Send + 'static,
{
    fn insert(&self, record: &T) -> Result<()> {
        self.done(Op::Insert, record)
    }

    fn select(&self, record: &T) -> Result<Vec<T>> {
        match self.call(Op::Select, record) {
            Outcome::Rows(rows) => Ok(rows),
            Outcome::Done(result) => result.map(|()| vec![]),
        }
    }

    fn update(&self, record: &T) -> Result<()> {
        self.done(Op::Update, record)
    }

    fn delete(&self, record: &T) -> Result<()> {
        self.done(Op::Delete, record)
    }
}

impl<T> fmt::Debug for MockTable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockTable")
            .field("record", &std::any::type_name::<T>())
            .finish()
    }
}
