use std::sync::LazyLock;

use regex::Regex;

// "BenchmarkRand-12       	40832551	        29.10 ns/op	       0 B/op	       0 allocs/op"
// Digit and whitespace classes are ASCII-only so every captured number
// parses as f64.
static BENCH_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(Benchmark[_A-Z][^\t\n\f\r ]+)[\t\n\f\r ]+[0-9]+[\t\n\f\r ]+([0-9]+(?:\.[0-9]+)?) ns/op",
    )
    .expect("benchmark line pattern compiles")
});

/// Pulls `(benchmark name, ns/op)` out of one line of `go test -bench`
/// output. Lines without a benchmark result yield `None`.
pub fn extract(line: &str) -> Option<(&str, f64)> {
    let caps = BENCH_LINE.captures(line)?;
    let name = caps.get(1)?.as_str();
    let text = caps.get(2)?.as_str();
    let sample = text
        .parse::<f64>()
        .unwrap_or_else(|_| panic!("can't parse float: {text:?}"));
    Some((name, sample))
}

#[cfg(test)]
mod tests {
    use super::extract;

    #[test]
    fn test_extract_ignores_trailing_counters() {
        let line = "BenchmarkParse_JSON-8\t  500\t  2456.5 ns/op\t  312 B/op\t  7 allocs/op";
        assert_eq!(extract(line), Some(("BenchmarkParse_JSON-8", 2456.5)));
    }

    #[test]
    fn test_extract_requires_uppercase_after_prefix() {
        assert_eq!(extract("Benchmarkrand-12  10  29.16 ns/op"), None);
    }
}
