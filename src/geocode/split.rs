// src/geocode/split.rs
//
// Positional parsing of the raw store dump.
// Each logical line is "name,address...,phone,type"; the address may carry commas.

use crate::config::consts::STORE_DUMP_FIELDS;
use crate::config::options::GeocodeOptions;
use crate::error::{Error, Result};

/// How a dump line is cut into fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitRule {
    /// Separating commas consumed; yields `split_limit + 1` fields.
    pub split_limit: usize,
    /// The field that swallows surplus commas.
    pub overflow_field: usize,
}

impl SplitRule {
    pub fn new(split_limit: usize, overflow_field: usize) -> Self {
        Self { split_limit, overflow_field }
    }

    pub fn from_options(opts: &GeocodeOptions) -> Self {
        Self::new(opts.split_limit, opts.address_field)
    }

    pub fn field_count(&self) -> usize {
        self.split_limit + 1
    }

    /// Split one line. Fields before the overflow field are cut from the left,
    /// fields after it from the right; every field is trimmed.
    /// `line_no` is only used in the error.
    pub fn split(&self, line: &str, line_no: usize) -> Result<Vec<String>> {
        let commas = line.matches(',').count();
        if commas < self.split_limit {
            return Err(Error::MalformedRow {
                line: line_no,
                expected: self.field_count(),
                found: commas + 1,
            });
        }

        let left = self.overflow_field;
        let right = self.split_limit - self.overflow_field;

        let mut head: Vec<&str> = line.splitn(left + 1, ',').collect();
        let rest = head.pop().unwrap_or("");
        if left == 0 {
            head.clear();
        }

        let mut tail: Vec<&str> = rest.rsplitn(right + 1, ',').collect();
        let middle = tail.pop().unwrap_or("");
        tail.reverse();

        let mut out = Vec::with_capacity(self.field_count());
        out.extend(head.into_iter().map(|f| f.trim().to_string()));
        out.push(middle.trim().to_string());
        out.extend(tail.into_iter().map(|f| f.trim().to_string()));
        Ok(out)
    }
}

/// One parsed store line, still without coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressRow {
    pub store: String,
    pub address: String,
    pub phone: String,
    pub kind: String,
}

impl AddressRow {
    fn from_fields(mut f: Vec<String>) -> Self {
        // Callers guarantee four fields.
        let kind = f.pop().unwrap_or_default();
        let phone = f.pop().unwrap_or_default();
        let address = f.pop().unwrap_or_default();
        let store = f.pop().unwrap_or_default();
        Self { store, address, phone, kind }
    }
}

/// Drop `skip` leading lines, then split the rest into store rows.
/// Any line that does not yield exactly four fields aborts the parse.
pub fn parse_dump(lines: &[String], skip: usize, rule: SplitRule) -> Result<Vec<AddressRow>> {
    if rule.field_count() != STORE_DUMP_FIELDS {
        return Err(Error::Config(format!(
            "store dump needs 4 fields (Store, Address, Phone Number, Type), split_limit gives {}",
            rule.field_count()
        )));
    }

    let mut out = Vec::with_capacity(lines.len().saturating_sub(skip));
    for (i, line) in lines.iter().enumerate().skip(skip) {
        let fields = rule.split(line, i + 1)?;
        out.push(AddressRow::from_fields(fields));
    }
    logd!("Geocode: parsed {} store lines (skipped {})", out.len(), skip.min(lines.len()));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_at_edges() {
        let first = SplitRule::new(2, 0);
        assert_eq!(first.split("a,b,c,d", 1).unwrap(), vec!["a,b", "c", "d"]);

        let last = SplitRule::new(2, 2);
        assert_eq!(last.split("a,b,c,d", 1).unwrap(), vec!["a", "b", "c,d"]);
    }

    #[test]
    fn empty_fields_are_kept() {
        let rule = SplitRule::new(3, 1);
        assert_eq!(rule.split("Shop,,,", 1).unwrap(), vec!["Shop", "", "", ""]);
    }
}
