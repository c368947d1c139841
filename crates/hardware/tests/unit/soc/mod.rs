//! Unit tests for the memory space and the memory-mapped display.
