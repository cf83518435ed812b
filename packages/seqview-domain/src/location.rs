/// Drops the contig qualifier from a genomic location, leaving the range.
/// `"chr1:100-200"` becomes `"100-200"`; a bare range is returned as-is.
pub fn strip_contig(location: &str) -> &str {
	location.split_once(':').map(|(_, range)| range).unwrap_or(location)
}
