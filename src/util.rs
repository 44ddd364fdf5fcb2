//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
/// This is intentionally simple (no nested/conditional logic).
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Split `items` into `columns` contiguous slices of `ceil(len / columns)`.
/// Trailing columns may be shorter or empty; order is preserved.
pub fn split_columns<T>(items: &[T], columns: usize) -> Vec<&[T]> {
  let columns = columns.max(1);
  let per_column = items.len().div_ceil(columns).max(1);
  let mut out: Vec<&[T]> = items.chunks(per_column).collect();
  out.resize(columns, &[]);
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_fill_template_replaces_all_keys() {
    assert_eq!(fill_template("{total} calculs en {mins} minutes", &[("total", "40"), ("mins", "5")]), "40 calculs en 5 minutes");
    assert_eq!(fill_template("no keys", &[("total", "1")]), "no keys");
  }

  #[test]
  fn test_split_columns_even() {
    let items: Vec<u32> = (0..60).collect();
    let cols = split_columns(&items, 3);
    assert_eq!(cols.len(), 3);
    assert!(cols.iter().all(|c| c.len() == 20));
    assert_eq!(cols[1][0], 20);
  }

  #[test]
  fn test_split_columns_uneven_and_short() {
    let items = [1, 2, 3, 4, 5];
    let cols = split_columns(&items, 2);
    assert_eq!(cols, vec![&[1, 2, 3][..], &[4, 5][..]]);

    let cols = split_columns(&items[..1], 3);
    assert_eq!(cols.len(), 3);
    assert_eq!(cols[0], &[1]);
    assert!(cols[1].is_empty() && cols[2].is_empty());
  }
}
