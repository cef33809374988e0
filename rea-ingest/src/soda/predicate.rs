//! `$where` clause construction for SODA queries.
//!
//! Filter values arriving from the request layer (borough names, value
//! thresholds) must never be spliced into the clause verbatim. Text values
//! go through SoQL single-quote escaping and numbers are formatted here, so
//! callers cannot produce a malformed or injected predicate.

/// Builder for a conjunction of filter clauses.
#[derive(Debug, Clone, Default)]
pub struct Where {
    clauses: Vec<String>,
}

impl Where {
    pub fn new() -> Self {
        Self::default()
    }

    /// `column > value` for a numeric threshold.
    pub fn gt(mut self, column: &str, value: f64) -> Self {
        self.clauses.push(format!("{column} > {value}"));
        self
    }

    /// `column = 'value'`, with single quotes in the value doubled per SoQL
    /// string literal rules.
    pub fn eq_text(mut self, column: &str, value: &str) -> Self {
        self.clauses
            .push(format!("{column} = '{}'", value.replace('\'', "''")));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn to_clause(&self) -> String {
        self.clauses.join(" AND ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_clauses_with_and() {
        let clause = Where::new().gt("sale_price", 0.0).eq_text("borough", "3");
        assert_eq!(clause.to_clause(), "sale_price > 0 AND borough = '3'");
    }

    #[test]
    fn escapes_single_quotes_in_text_values() {
        let clause = Where::new().eq_text("neighborhood", "BULL'S HEAD");
        assert_eq!(clause.to_clause(), "neighborhood = 'BULL''S HEAD'");
    }

    #[test]
    fn formats_numeric_thresholds() {
        let clause = Where::new().gt("appraised_total_value", 500000.0);
        assert_eq!(clause.to_clause(), "appraised_total_value > 500000");
    }

    #[test]
    fn empty_builder_produces_no_clause() {
        assert!(Where::new().is_empty());
    }
}
