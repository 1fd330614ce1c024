use std::fmt::{Display, Error, Formatter};

/// Given a list t1, t2, ..., tn, prints them with spacing char c.
pub fn lst_print<T>(f: &mut Formatter, lst: &[T], c: &str) -> Result<(), Error>
where
  T: Display,
{
  let (tail, body) = match lst.split_last() {
    Some(split) => split,
    None => return Ok(()),
  };
  for t in body {
    write!(f, "{}{}", t, c)?;
  }
  write!(f, "{}", tail)
}

#[cfg(test)]
mod test {
  use super::lst_print;
  use std::fmt;

  struct Spaced(Vec<usize>);

  impl fmt::Display for Spaced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      lst_print(f, &self.0, " ")
    }
  }

  #[test]
  fn separates_without_trailer() {
    assert_eq!(Spaced(vec![3, 1, 4]).to_string(), "3 1 4");
    assert_eq!(Spaced(vec![]).to_string(), "");
  }
}
