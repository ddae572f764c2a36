// src/noyau/format.rs
//
// Affichage du résultat : arrondi décimal EXACT (rationnel) à `decimales` chiffres,
// zéros finaux retirés, jamais de notation exponentielle (la sortie doit
// pouvoir être re-tokenisée telle quelle).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Nombre de décimales par défaut (supprime le bruit flottant).
pub const DECIMALES_DEFAUT: u32 = 10;

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
fn scaled_to_decimal(mut scaled: BigInt, digits: u32) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 || frac_part.is_zero() {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits as usize {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    format!("{signe}{int_part}.{frac}")
}

/// Formate un résultat pour l’affichage.
/// - arrondi au plus proche (demi => loin de zéro) à `decimales` chiffres
/// - résultat entier => pas de point décimal ; "-0" => "0"
/// - non fini => "Infinity", "-Infinity", "NaN"
pub fn formater_resultat(x: f64, decimales: u32) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    // x fini => from_float réussit toujours
    let Some(r) = BigRational::from_float(x) else {
        return "NaN".to_string();
    };

    let scaled = (r * BigRational::from_integer(pow10(decimales)))
        .round()
        .to_integer();
    scaled_to_decimal(scaled, decimales)
}
