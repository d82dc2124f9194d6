//! Chart geometry for the dashboard: the category donut (with the "Etc"
//! bucket merge) and the user-vs-site comparison bars. Everything here is a
//! pure function over category counts so the widgets stay draw-only.

use std::cmp::Ordering;
use std::f64::consts::TAU;

use crate::models::CategoryCounts;

/// Name of the synthetic slice absorbing small categories.
pub const ETC_NAME: &str = "Etc";

/// Slices below this share of the total are merged into the "Etc" bucket.
pub const OTHER_BUCKET_RATIO: f64 = 0.04;

/// Minimum angular span (radians) for an arc to carry its percentage line.
pub const MIN_LABEL_SPAN: f64 = 0.25;

/// Number of categories shown in the comparison bar chart.
pub const TOP_CATEGORY_COUNT: usize = 5;

/// Headroom added above the largest displayed fraction before nicing the
/// axis bound.
pub const AXIS_HEADROOM: f64 = 0.10;

// The "Average Sefaria User" caption sits after the bar end when that end
// falls within the left 250/660 of the axis, and inside the bar otherwise.
// The ratio carries over to any axis width.
pub const CAPTION_FLIP_RATIO: f64 = 250.0 / 660.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub name: String,
    pub value: f64,
}

impl CategorySlice {
    pub fn new<S: Into<String>>(name: S, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One donut arc. Angles are radians measured clockwise from 12 o'clock.
#[derive(Debug, Clone)]
pub struct PieArc {
    pub slice: CategorySlice,
    pub start_angle: f64,
    pub end_angle: f64,
    pub fraction: f64,
}

impl PieArc {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// One band of the comparison chart. Fractions are each normalized against
/// their own distribution, so the bars compare shares, not raw volume.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub category: String,
    pub user_fraction: f64,
    pub site_fraction: f64,
}

#[derive(Debug, Clone, Default)]
pub struct BarLayout {
    pub rows: Vec<BarRow>,
    pub axis_max: f64,
}

/// Convert counts to fractions of the total. The caller guards against a
/// zero total; dividing by zero here yields non-finite values.
pub fn map_to_percentage(counts: &CategoryCounts) -> CategoryCounts {
    let total: f64 = counts.values().sum();
    counts
        .iter()
        .map(|(name, value)| (name.clone(), value / total))
        .collect()
}

/// Merge slices below 4% of the total into a single trailing "Etc" slice.
///
/// Kept slices stay in input order. The "Etc" slice is appended even when
/// nothing fell below the threshold (zero value); the donut renderer skips
/// zero-span arcs so the empty bucket never draws. Callers apply this only
/// to sequences longer than two slices.
pub fn make_other_category(slices: Vec<CategorySlice>) -> Vec<CategorySlice> {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    let bar = total * OTHER_BUCKET_RATIO;

    let mut kept = Vec::with_capacity(slices.len());
    let mut remainder = 0.0;
    for slice in slices {
        // A pre-existing "Etc" always folds into the bucket so the output
        // carries exactly one slice by that name.
        if slice.value >= bar && slice.name != ETC_NAME {
            kept.push(slice);
        } else {
            remainder += slice.value;
        }
    }
    kept.push(CategorySlice::new(ETC_NAME, remainder));
    kept
}

/// Arc ordering: "Etc" sorts last regardless of value, everything else by
/// value descending. Ties keep their incoming order under a stable sort.
pub fn compare_slices(a: &CategorySlice, b: &CategorySlice) -> Ordering {
    match (a.name == ETC_NAME, b.name == ETC_NAME) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal),
    }
}

/// Lay out the donut for one category map: bucket small slices when there
/// are more than two, order by [`compare_slices`], and partition the full
/// circle proportionally. Returns an empty layout for an empty or all-zero
/// map.
pub fn pie_arcs(counts: &CategoryCounts) -> Vec<PieArc> {
    let mut slices: Vec<CategorySlice> = counts
        .iter()
        .map(|(name, value)| CategorySlice::new(name.clone(), *value))
        .collect();
    // Map iteration order is arbitrary; pin tie order by name before the
    // value sort so layouts are stable across renders.
    slices.sort_by(|a, b| a.name.cmp(&b.name));

    if slices.len() > 2 {
        slices = make_other_category(slices);
    }

    let total: f64 = slices.iter().map(|s| s.value).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    slices.sort_by(compare_slices);

    let mut angle = 0.0;
    slices
        .into_iter()
        .map(|slice| {
            let fraction = slice.value / total;
            let start_angle = angle;
            angle += fraction * TAU;
            PieArc {
                slice,
                start_angle,
                end_angle: angle,
                fraction,
            }
        })
        .collect()
}

/// Build the comparison chart: rank categories by the user's raw counts,
/// keep the top five, and pair each with its user and site share. The axis
/// bound is the largest displayed fraction plus headroom, rounded up to a
/// nice step. Empty or all-zero inputs produce an empty layout.
pub fn bar_layout(user_counts: &CategoryCounts, site_counts: &CategoryCounts) -> BarLayout {
    let user_total: f64 = user_counts.values().sum();
    let site_total: f64 = site_counts.values().sum();
    if user_total <= 0.0 || site_total <= 0.0 {
        return BarLayout::default();
    }

    let user_fractions = map_to_percentage(user_counts);
    let site_fractions = map_to_percentage(site_counts);

    let mut ranked: Vec<(&String, f64)> = user_counts.iter().map(|(k, v)| (k, *v)).collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    let rows: Vec<BarRow> = ranked
        .into_iter()
        .take(TOP_CATEGORY_COUNT)
        .map(|(category, _)| BarRow {
            category: category.clone(),
            user_fraction: user_fractions.get(category).copied().unwrap_or(0.0),
            site_fraction: site_fractions.get(category).copied().unwrap_or(0.0),
        })
        .collect();

    let max_fraction = rows
        .iter()
        .flat_map(|row| [row.user_fraction, row.site_fraction])
        .fold(0.0, f64::max);

    BarLayout {
        rows,
        axis_max: nice_ceil(max_fraction + AXIS_HEADROOM),
    }
}

/// Whether the "Average Sefaria User" caption fits after the site bar, or
/// must move inside it. `site_fraction` and `axis_max` are in axis units.
pub fn caption_fits_after_bar(site_fraction: f64, axis_max: f64) -> bool {
    if axis_max <= 0.0 {
        return true;
    }
    site_fraction / axis_max <= CAPTION_FLIP_RATIO
}

/// Round up to the next multiple of a 1/2/5 × 10^k step, sized for about
/// ten axis ticks. Never below the input.
pub fn nice_ceil(value: f64) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    let step = tick_increment(value, 10.0);
    (value / step).ceil() * step
}

fn tick_increment(stop: f64, count: f64) -> f64 {
    let step = stop / count;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[(&str, f64)]) -> CategoryCounts {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    fn slices(entries: &[(&str, f64)]) -> Vec<CategorySlice> {
        entries
            .iter()
            .map(|(name, value)| CategorySlice::new(*name, *value))
            .collect()
    }

    #[test]
    fn test_percentages_sum_to_one() {
        let input = counts(&[("Tanakh", 13.0), ("Talmud", 29.0), ("Midrash", 7.5)]);
        let fractions = map_to_percentage(&input);
        let sum: f64 = fractions.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((fractions["Talmud"] - 29.0 / 49.5).abs() < 1e-9);
    }

    #[test]
    fn test_other_bucket_conserves_total() {
        let input = slices(&[("A", 50.0), ("B", 30.0), ("C", 2.0), ("D", 1.0)]);
        let input_total: f64 = input.iter().map(|s| s.value).sum();
        let output = make_other_category(input);
        let output_total: f64 = output.iter().map(|s| s.value).sum();
        assert_eq!(input_total, output_total);
    }

    #[test]
    fn test_other_bucket_threshold_and_placement() {
        // total = 100, bar = 4: Halakhah(3) and Midrash(2) merge.
        let input = slices(&[
            ("Torah", 80.0),
            ("Talmud", 15.0),
            ("Halakhah", 3.0),
            ("Midrash", 2.0),
        ]);
        let output = make_other_category(input);
        assert_eq!(
            output,
            slices(&[("Torah", 80.0), ("Talmud", 15.0), ("Etc", 5.0)])
        );

        let etc_count = output.iter().filter(|s| s.name == ETC_NAME).count();
        assert_eq!(etc_count, 1);
        assert_eq!(output.last().unwrap().name, ETC_NAME);
    }

    #[test]
    fn test_other_bucket_appends_zero_slice_when_nothing_small() {
        let input = slices(&[("A", 40.0), ("B", 35.0), ("C", 25.0)]);
        let output = make_other_category(input);
        assert_eq!(output.len(), 4);
        assert_eq!(output.last().unwrap().name, ETC_NAME);
        assert_eq!(output.last().unwrap().value, 0.0);
    }

    #[test]
    fn test_existing_etc_slice_is_absorbed() {
        let input = slices(&[("A", 50.0), ("Etc", 40.0), ("B", 10.0)]);
        let output = make_other_category(input);
        assert_eq!(output.iter().filter(|s| s.name == ETC_NAME).count(), 1);
        assert_eq!(output.last().unwrap().value, 40.0);
        let total: f64 = output.iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_comparator_puts_etc_last() {
        let mut input = slices(&[("A", 10.0), ("B", 5.0), ("Etc", 3.0)]);
        input.sort_by(compare_slices);
        let names: Vec<&str> = input.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "Etc"]);

        let mut input = slices(&[("Etc", 100.0), ("A", 1.0)]);
        input.sort_by(compare_slices);
        let names: Vec<&str> = input.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A", "Etc"]);
    }

    #[test]
    fn test_pie_arcs_cover_full_circle() {
        let input = counts(&[
            ("Torah", 80.0),
            ("Talmud", 15.0),
            ("Halakhah", 3.0),
            ("Midrash", 2.0),
        ]);
        let arcs = pie_arcs(&input);

        let names: Vec<&str> = arcs.iter().map(|a| a.slice.name.as_str()).collect();
        assert_eq!(names, ["Torah", "Talmud", "Etc"]);

        let fractions: Vec<f64> = arcs.iter().map(|a| a.fraction).collect();
        assert!((fractions[0] - 0.80).abs() < 1e-9);
        assert!((fractions[1] - 0.15).abs() < 1e-9);
        assert!((fractions[2] - 0.05).abs() < 1e-9);

        assert_eq!(arcs[0].start_angle, 0.0);
        for pair in arcs.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-9);
        }
        assert!((arcs.last().unwrap().end_angle - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_pie_arcs_pass_through_two_slices() {
        // Two slices skip the bucket merge entirely: no "Etc" even though
        // one slice is far below the 4% bar.
        let input = counts(&[("Tanakh", 99.0), ("Musar", 1.0)]);
        let arcs = pie_arcs(&input);
        let names: Vec<&str> = arcs.iter().map(|a| a.slice.name.as_str()).collect();
        assert_eq!(names, ["Tanakh", "Musar"]);
    }

    #[test]
    fn test_pie_arcs_empty_on_zero_total() {
        assert!(pie_arcs(&CategoryCounts::new()).is_empty());
        let zeros = counts(&[("A", 0.0), ("B", 0.0), ("C", 0.0)]);
        assert!(pie_arcs(&zeros).is_empty());
    }

    #[test]
    fn test_bar_layout_top_five_by_user_volume() {
        let user = counts(&[
            ("History", 50.0),
            ("Law", 40.0),
            ("Liturgy", 30.0),
            ("Bible", 20.0),
            ("Mishnah", 10.0),
            ("Other", 5.0),
        ]);
        let site = counts(&[
            ("History", 1.0),
            ("Law", 1.0),
            ("Liturgy", 1.0),
            ("Bible", 1.0),
            ("Mishnah", 1.0),
            ("Other", 95.0),
        ]);

        let layout = bar_layout(&user, &site);
        let order: Vec<&str> = layout.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(order, ["History", "Law", "Liturgy", "Bible", "Mishnah"]);

        // Each side is normalized against its own total.
        assert!((layout.rows[0].user_fraction - 50.0 / 155.0).abs() < 1e-9);
        assert!((layout.rows[0].site_fraction - 0.01).abs() < 1e-9);
    }

    #[test]
    fn test_bar_layout_axis_bound() {
        let user = counts(&[("A", 70.0), ("B", 30.0)]);
        let site = counts(&[("A", 10.0), ("B", 90.0)]);
        let layout = bar_layout(&user, &site);

        let max_fraction = layout
            .rows
            .iter()
            .flat_map(|r| [r.user_fraction, r.site_fraction])
            .fold(0.0, f64::max);
        assert!(layout.axis_max >= max_fraction + AXIS_HEADROOM - 1e-12);
    }

    #[test]
    fn test_bar_layout_empty_on_zero_totals() {
        let empty = CategoryCounts::new();
        let some = counts(&[("A", 1.0)]);
        assert!(bar_layout(&empty, &some).rows.is_empty());
        assert!(bar_layout(&some, &empty).rows.is_empty());
    }

    #[test]
    fn test_nice_ceil() {
        assert_eq!(nice_ceil(0.0), 0.0);
        let nice = nice_ceil(0.43);
        assert!(nice >= 0.43);
        assert!((nice - 0.45).abs() < 1e-9);
        let nice = nice_ceil(0.97);
        assert!((nice - 1.0).abs() < 1e-9);
        // Already on a step stays put.
        assert!((nice_ceil(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_caption_flip() {
        // Bar ends early on the axis: caption goes after the bar.
        assert!(caption_fits_after_bar(0.10, 0.50));
        // Bar sweeps most of the axis: caption moves inside.
        assert!(!caption_fits_after_bar(0.45, 0.50));
    }
}
