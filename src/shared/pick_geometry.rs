//! Reine Geometrie-Funktionen für Hit-Test, Nächster-Punkt-Suche und
//! Einfüge-Logik.
//!
//! Layer-neutral: kann von `app` und Tests importiert werden, ohne
//! Zirkel-Abhängigkeiten zu erzeugen. Alle Suchen degradieren bei leerer
//! Eingabe zu „kein Treffer" statt zu einem Fehler.

use glam::Vec2;

/// Achsenparalleler Box-Test: Treffer, wenn der Zeiger auf beiden Achsen
/// näher als `threshold` am Zielpunkt liegt (kein euklidischer Abstand).
pub fn within_box_threshold(pointer: Vec2, target: Vec2, threshold: f32) -> bool {
    (pointer.x - target.x).abs() < threshold && (pointer.y - target.y).abs() < threshold
}

/// Findet den ersten Punkt innerhalb des Box-Thresholds.
///
/// First-Match-Wins: überlappende Punkte werden nicht weiter unterschieden.
pub fn hit_test(points: &[Vec2], pointer: Vec2, threshold: f32) -> Option<usize> {
    points
        .iter()
        .position(|p| within_box_threshold(pointer, *p, threshold))
}

/// Findet den euklidisch nächsten Punkt zur Query-Position.
///
/// Bei exakt gleichen Distanzen gewinnt der niedrigste Index — der Scan
/// ersetzt das Minimum nur bei striktem `<`.
pub fn nearest_point(points: &[Vec2], query: Vec2) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in points.iter().enumerate() {
        let dist = query.distance(*p);
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| i)
}

/// Bestimmt den Einfüge-Slot relativ zum nächsten Punkt `nearest`.
///
/// Einfall-Vektor (`anchor - prev`) und Ausfall-Vektor (`next - anchor`)
/// an `nearest` (Nachbarn mit Wraparound) werden zur Winkelhalbierenden
/// gemittelt. Zeigt der Klick-Vektor in deren Richtung (positives
/// Skalarprodukt), wird hinter `nearest` eingefügt, sonst davor.
pub fn insertion_index(points: &[Vec2], nearest: usize, click: Vec2) -> usize {
    let n = points.len();
    let anchor = points[nearest];
    let next = points[(nearest + 1) % n];
    let prev = points[(nearest + n - 1) % n];

    let outgoing = next - anchor;
    let incoming = anchor - prev;
    let bisector = (outgoing + incoming) * 0.5;
    let towards_click = click - anchor;

    if bisector.dot(towards_click) > 0.0 {
        (nearest + 1) % n
    } else {
        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.5, 1.0),
        ]
    }

    #[test]
    fn test_box_test_prueft_beide_achsen() {
        let target = Vec2::new(0.5, 0.5);
        assert!(within_box_threshold(Vec2::new(0.504, 0.496), target, 0.005));
        // Euklidisch nah, aber auf einer Achse außerhalb der Box
        assert!(!within_box_threshold(Vec2::new(0.506, 0.5), target, 0.005));
    }

    #[test]
    fn test_hit_test_liefert_ersten_treffer() {
        let points = vec![Vec2::new(0.2, 0.2), Vec2::new(0.2, 0.2), Vec2::ONE];
        assert_eq!(hit_test(&points, Vec2::new(0.2, 0.2), 0.01), Some(0));
        assert_eq!(hit_test(&points, Vec2::new(5.0, 5.0), 0.01), None);
    }

    #[test]
    fn test_naechster_punkt_bei_gleichstand_niedrigster_index() {
        // Beide Punkte exakt gleich weit von der Query entfernt
        let points = vec![Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)];
        assert_eq!(nearest_point(&points, Vec2::ZERO), Some(0));
    }

    #[test]
    fn test_naechster_punkt_leere_liste_kein_treffer() {
        assert_eq!(nearest_point(&[], Vec2::ZERO), None);
    }

    #[test]
    fn test_einfuegen_mit_der_winkelhalbierenden_hinter_dem_punkt() {
        let points = triangle();
        // Winkelhalbierende an Punkt 1: ((1,0)-(0,0) + (0.5,1)-(1,0)) / 2 = (0.25, 0.5)
        let click = Vec2::new(1.25, 0.5);
        assert_eq!(insertion_index(&points, 1, click), 2);
    }

    #[test]
    fn test_einfuegen_gegen_die_winkelhalbierende_vor_dem_punkt() {
        let points = triangle();
        let click = Vec2::new(0.75, -0.5);
        assert_eq!(insertion_index(&points, 1, click), 1);
    }

    #[test]
    fn test_einfuegen_hinter_letztem_punkt_wrappt_auf_slot_null() {
        let points = triangle();
        // Winkelhalbierende an Punkt 2: ((0,0)-(0.5,1) + (0.5,1)-(1,0)) / 2 = (-0.5, 0)
        let click = Vec2::new(0.2, 1.0);
        assert_eq!(insertion_index(&points, 2, click), 0);
    }
}
