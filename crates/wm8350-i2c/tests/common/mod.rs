#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use wm8350_i2c::I2cBus;

/// Address the WM8350 answers on with CSB low.
pub const ADDR: u8 = 0x1a;

/// One transfer seen by the mock bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transfer {
    Send { address: u8, bytes: Vec<u8> },
    Receive { address: u8, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// How the mock answers the next transfer.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    /// Move the whole buffer.
    Full,
    /// Report success with this many bytes moved.
    Short(usize),
    /// Report a bus failure.
    Fail,
}

/// A bus that records every transfer and answers from a script.
///
/// Transfers without a scripted reply move the whole buffer. Received bytes
/// come from the rx queue, padded with zeroes once it runs dry.
#[derive(Default)]
pub struct MockBus {
    log: RefCell<Vec<Transfer>>,
    replies: RefCell<VecDeque<Reply>>,
    rx: RefCell<VecDeque<u8>>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, reply: Reply) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn queue_rx(&self, bytes: &[u8]) {
        self.rx.borrow_mut().extend(bytes.iter().copied());
    }

    pub fn transfers(&self) -> Vec<Transfer> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    fn next_reply(&self) -> Reply {
        self.replies.borrow_mut().pop_front().unwrap_or(Reply::Full)
    }
}

impl I2cBus for MockBus {
    type Error = MockError;

    fn send(&self, address: u8, bytes: &[u8]) -> Result<usize, MockError> {
        self.log
            .borrow_mut()
            .push(Transfer::Send { address, bytes: bytes.to_vec() });
        match self.next_reply() {
            Reply::Full => Ok(bytes.len()),
            Reply::Short(n) => Ok(n),
            Reply::Fail => Err(MockError),
        }
    }

    fn receive(&self, address: u8, buf: &mut [u8]) -> Result<usize, MockError> {
        self.log
            .borrow_mut()
            .push(Transfer::Receive { address, len: buf.len() });
        let n = match self.next_reply() {
            Reply::Full => buf.len(),
            Reply::Short(n) => n,
            Reply::Fail => return Err(MockError),
        };
        let mut rx = self.rx.borrow_mut();
        for byte in buf.iter_mut().take(n) {
            *byte = rx.pop_front().unwrap_or(0);
        }
        Ok(n)
    }
}

pub fn send(bytes: &[u8]) -> Transfer {
    Transfer::Send { address: ADDR, bytes: bytes.to_vec() }
}

pub fn receive(len: usize) -> Transfer {
    Transfer::Receive { address: ADDR, len }
}
