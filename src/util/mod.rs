pub mod prettyprint;

// Helper macro to time evaluating an expression (like a function call.)
macro_rules! time {
  ( $x:expr ) => {{
    let t1 = ::std::time::Instant::now();
    let result = $x;
    (result, t1.elapsed())
  }};
}

pub(crate) use time;
