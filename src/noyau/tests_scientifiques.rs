//! Tests scientifiques (campagne) : invariants + valeurs de référence + limites contrôlées.
//!
//! But : vérifier les propriétés mathématiques sans faire chauffer la machine.
//! - budget temps global sur les passes larges
//! - plafonds bornés
//!
//! Notes importantes (aligné avec l’état actuel du noyau) :
//! - La première évaluation paie le calcul de la suite de Bernoulli (plafond
//!   200, mémoïsé ensuite) : le budget des tests de stress en tient compte.
//! - La règle d’arrêt INCLUT le terme sous epsilon : epsilon borne le terme
//!   d’arrêt, le reste de la série est du même ordre (d’où les marges ×4).
//! - Réflexion : seul le terme −x/2 est impair dans le développement, donc
//!   f(−x) − f(x) = x terme à terme, avec des comptes N identiques.

use std::time::{Duration, Instant};

use super::serie::{evaluer, ErreurSerie};
use super::{nombres_bernoulli, suite_bernoulli};

fn eval_ok(x: f64, epsilon: f64) -> super::ResultatSerie {
    evaluer(x, epsilon).unwrap_or_else(|e| panic!("x={x} eps={epsilon} err={e}"))
}

/// f exacte (forme fermée flottante), pour comparaison.
fn f_reference(x: f64) -> f64 {
    x / (x.exp() - 1.0)
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Valeurs de référence ------------------------ */

#[test]
fn sci_valeurs_connues() {
    // x = 0.5, eps = 1e-4 : f(0.5) ≈ 0.7707464591
    let r = eval_ok(0.5, 0.0001);
    assert!((r.valeur - 0.7707464591).abs() < 1e-4);
    assert!(r.nb_termes > 0);

    // x = 1, eps = 1e-3 : f(1) = 1/(e−1) ≈ 0.5819767069
    let r = eval_ok(1.0, 0.001);
    assert!((r.valeur - 0.5819767069).abs() < 1e-3);
    assert!(r.nb_termes > 0);

    // x = −1, eps = 1e-5 : f(−1) = e/(e−1)
    let attendu = std::f64::consts::E / (std::f64::consts::E - 1.0);
    let r = eval_ok(-1.0, 0.00001);
    assert!((r.valeur - attendu).abs() < 1e-5);
    assert!(r.nb_termes > 0);
}

#[test]
fn sci_proche_forme_fermee_sur_grille() {
    // |x| < 2π : l’approximation doit coller à la forme fermée à eps près
    // (marge ×4 : eps borne le terme d’arrêt, pas le reste complet)
    let eps = 1e-8;
    for dixiemes in (-50i32..=50).step_by(5) {
        if dixiemes == 0 {
            continue;
        }
        let x = f64::from(dixiemes) / 10.0;
        let r = eval_ok(x, eps);
        assert!(
            (r.valeur - f_reference(x)).abs() < 4.0 * eps,
            "x={x} valeur={} ref={}",
            r.valeur,
            f_reference(x)
        );
    }
}

#[test]
fn sci_limite_en_zero() {
    for &eps in &[0.5, 1e-3, 1e-9] {
        let r = eval_ok(0.0, eps);
        assert_eq!(r.valeur, 1.0);
        assert_eq!(r.nb_termes, 1);
    }
}

/* ------------------------ Invariants analytiques ------------------------ */

#[test]
fn sci_reflexion() {
    // f(−x) − f(x) = x : le développement n’a qu’un terme impair (−x/2),
    // donc l’identité tient terme à terme avec des N identiques.
    for &x in &[0.25, 0.5, 1.0, 2.0, 3.0] {
        let plus = eval_ok(x, 1e-10);
        let moins = eval_ok(-x, 1e-10);
        assert_eq!(plus.nb_termes, moins.nb_termes, "x={x}");
        assert!(
            (moins.valeur - plus.valeur - x).abs() < 1e-12,
            "x={x} : f(−x)−f(x)={}",
            moins.valeur - plus.valeur
        );
    }
}

#[test]
fn sci_monotonie_en_epsilon() {
    // tolérance plus stricte => jamais moins de termes
    let epsilons = [0.1, 1e-2, 1e-3, 1e-4, 1e-5, 1e-6, 1e-7, 1e-8];
    for &x in &[-3.0, -1.0, 0.5, 1.5, 4.0] {
        let mut precedent = 0usize;
        for &eps in &epsilons {
            let r = eval_ok(x, eps);
            assert!(
                r.nb_termes >= precedent,
                "x={x} eps={eps} : N={} < N précédent={precedent}",
                r.nb_termes
            );
            precedent = r.nb_termes;
        }
    }
}

#[test]
fn sci_determinisme_au_bit_pres() {
    // aucune trace d’état caché : rejouer donne le même bit pattern
    for &(x, eps) in &[(0.5, 1e-4), (-1.0, 1e-5), (3.0, 1e-8)] {
        let a = eval_ok(x, eps);
        let b = eval_ok(x, eps);
        let c = eval_ok(x, eps);
        assert_eq!(a.valeur.to_bits(), b.valeur.to_bits());
        assert_eq!(b.valeur.to_bits(), c.valeur.to_bits());
        assert_eq!(a.nb_termes, c.nb_termes);
    }

    let s1 = nombres_bernoulli(20);
    let s2 = nombres_bernoulli(20);
    assert_eq!(s1, s2);
}

/* ------------------------ Limites (divergence, plafond) ------------------------ */

#[test]
fn sci_hors_rayon_echec_explicite() {
    // |x| ≥ 2π : la série diverge, le plafond est atteint, aucun résultat partiel
    for &x in &[6.5, 7.0, 10.0, -7.0, -20.0] {
        match evaluer(x, 1e-3) {
            Err(ErreurSerie::PrecisionInatteignable { plafond }) => {
                assert_eq!(plafond, super::PLAFOND_DEFAUT, "x={x}")
            }
            autre => panic!("x={x} : attendu PrecisionInatteignable, reçu {autre:?}"),
        }
    }
}

/* ------------------------ Cohérence suite exacte / vue f64 ------------------------ */

#[test]
fn sci_suite_exacte_vs_vue_flottante() {
    use super::bernoulli::rationnel_vers_f64;

    let exacte = suite_bernoulli(40);
    let flottante = nombres_bernoulli(40);
    assert_eq!(exacte.len(), flottante.len());

    for (k, (r, v)) in exacte.iter().zip(&flottante).enumerate() {
        assert_eq!(rationnel_vers_f64(r), *v, "indice {k}");
    }
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_grille_safe() {
    let t0 = Instant::now();
    // généreux : la première évaluation paie la récurrence exacte jusqu’à 200
    let max = Duration::from_secs(10);

    for dixiemes in (-50i32..=50).step_by(2) {
        let x = f64::from(dixiemes) / 10.0;
        let r = eval_ok(x, 1e-6);
        assert!(r.valeur.is_finite(), "x={x}");
        budget(t0, max);
    }
}
