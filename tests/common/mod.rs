#![allow(dead_code)]

use furniture_pricer::domain::valuation::query::PredictionQuery;

pub const HEADER: &str = "Furniture_Type,Material,Quality,Color,Purchase_Year,Original_Price,Condition_Years,Target_Year,Predicted_Price";

/// Formats an amount the way the source dataset does: `"₹12,345"` (quoted).
pub fn rupees(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("\"₹{}\"", out)
}

/// Synthetic dataset: purchase years {2018, 2020}, Chair/Table, two
/// materials, qualities and colors, observed at 0..=6 years of age.
pub fn sample_csv() -> String {
    let mut csv = String::from(HEADER);
    csv.push('\n');
    for &purchase_year in &[2018, 2020] {
        for (type_idx, furniture_type) in ["Chair", "Table"].iter().enumerate() {
            for (mat_idx, material) in ["Metal", "Wood"].iter().enumerate() {
                for (q_idx, quality) in ["High", "Low"].iter().enumerate() {
                    for color in ["Black", "Brown"] {
                        let original = 10_000 + 5_000 * type_idx as u64 + 2_000 * mat_idx as u64;
                        for condition_years in 0..=6u32 {
                            let keep = if q_idx == 0 { 0.92f64 } else { 0.85f64 };
                            let observed =
                                (original as f64 * keep.powi(condition_years as i32)).round() as u64;
                            csv.push_str(&format!(
                                "{},{},{},{},{},{},{},{},{}\n",
                                furniture_type,
                                material,
                                quality,
                                color,
                                purchase_year,
                                rupees(original),
                                condition_years,
                                purchase_year + condition_years as i32,
                                rupees(observed),
                            ));
                        }
                    }
                }
            }
        }
    }
    csv
}

pub fn query(purchase_year: i32, target_year: i32, original_price: u64) -> PredictionQuery {
    PredictionQuery {
        purchase_year,
        target_year,
        original_price,
        furniture_type: "Chair".to_string(),
        material: "Wood".to_string(),
        quality: "High".to_string(),
        color: "Brown".to_string(),
    }
}
