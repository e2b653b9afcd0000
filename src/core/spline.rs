//! Das zentrale Kurvenmodell: geschlossene B-Spline mit De-Boor-Auswertung.

use glam::Vec2;
use thiserror::Error;

/// Fehler des Spline-Modells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplineError {
    /// Grad/Punktzahl-Vertrag bei der Konstruktion verletzt.
    #[error("ungültige Spline-Konfiguration: Grad {degree} braucht mindestens {min} Kontrollpunkte (vorhanden: {count})")]
    InvalidConfiguration {
        /// Angeforderter Grad
        degree: usize,
        /// Minimal nötige Punktzahl (`degree + 1`)
        min: usize,
        /// Tatsächlich übergebene Punktzahl
        count: usize,
    },
    /// Struktur-Mutation an einem ungültigen Index angefordert.
    #[error("Kontrollpunkt-Index {index} außerhalb des gültigen Bereichs (Länge {len})")]
    IndexOutOfRange {
        /// Angeforderter Index
        index: usize,
        /// Aktuelle Länge der Kontrollpunkt-Sequenz
        len: usize,
    },
}

/// B-Spline-Kurve über einer geordneten Kontrollpunkt-Sequenz.
///
/// Der Knotenvektor ist uniform über `[0, 1]` verteilt (`knots[i] = i / (len - 1)`)
/// und wird bei jeder Längenänderung neu abgeleitet. Die Ränder werden nicht
/// über End-Knoten-Multiplizität geklemmt, sondern über die Spannen-Klemmung
/// in [`Self::knot_span`] — klassisches Clamping würde die Kurvenform am Rand
/// ändern.
///
/// Bei `closed = true` sind die letzten `degree` Punkte Spiegelkopien der
/// ersten `degree` Punkte. Die Kopien werden per Index synchron gehalten
/// (kein Aliasing), weil Einfügen/Löschen die Indizes verschiebt.
#[derive(Debug, Clone)]
pub struct BSpline {
    degree: usize,
    control_points: Vec<Vec2>,
    closed: bool,
    knots: Vec<f32>,
}

impl BSpline {
    /// Erstellt eine neue Kurve aus Grad, Kontrollpunkten und Schließungs-Flag.
    ///
    /// Die Punktsequenz wird unverändert übernommen — der Spiegel-Tail wird
    /// erst bei der nächsten Struktur-Mutation synchronisiert. Die
    /// Referenzform verlässt sich auf genau dieses Verhalten.
    pub fn new(degree: usize, control_points: Vec<Vec2>, closed: bool) -> Result<Self, SplineError> {
        if degree < 1 || control_points.len() < degree + 1 {
            return Err(SplineError::InvalidConfiguration {
                degree,
                min: degree + 1,
                count: control_points.len(),
            });
        }

        let mut spline = Self {
            degree,
            control_points,
            closed,
            knots: Vec::new(),
        };
        spline.rebuild_knots();
        Ok(spline)
    }

    /// Baut eine geschlossene Kurve aus editierbaren Punkten neu auf.
    ///
    /// Die ersten `degree` Punkte werden als Spiegelkopien angehängt, damit
    /// die Schließungs-Invariante von Anfang an gilt. Das ist der Weg für
    /// Gradwechsel: Grad ist pro Instanz fix, das alte Modell wird verworfen
    /// und aus seinen editierbaren Punkten neu konstruiert.
    pub fn from_editable_points(degree: usize, editable: &[Vec2]) -> Result<Self, SplineError> {
        let mut points = editable.to_vec();
        if degree >= 1 && editable.len() >= degree {
            for i in 0..degree {
                points.push(editable[i]);
            }
        }
        Self::new(degree, points, true)
    }

    /// Die Referenz-Profilform des Editors: geschlossenes Quadrat-Profil
    /// vom Grad 3 mit 3 editierbaren Punkten.
    pub fn reference_seed() -> Self {
        let points = vec![
            Vec2::new(-0.1, -0.1),
            Vec2::new(-0.1, 0.1),
            Vec2::new(0.1, 0.1),
            Vec2::new(0.1, -0.1),
            Vec2::new(-0.1, -0.1),
            Vec2::new(-0.1, 0.1),
        ];
        let mut spline = Self {
            degree: 3,
            control_points: points,
            closed: true,
            knots: Vec::new(),
        };
        spline.rebuild_knots();
        spline
    }

    /// Grad der Kurve (fix für die Lebensdauer der Instanz).
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Ob die Kurve als geschlossene Schleife geführt wird.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Alle Kontrollpunkte inklusive Spiegel-Tail.
    pub fn control_points(&self) -> &[Vec2] {
        &self.control_points
    }

    /// Der abgeleitete Knotenvektor.
    pub fn knots(&self) -> &[f32] {
        &self.knots
    }

    /// Anzahl der editierbaren Kontrollpunkte (ohne Spiegel-Tail).
    pub fn editable_len(&self) -> usize {
        if self.closed {
            self.control_points.len() - self.degree
        } else {
            self.control_points.len()
        }
    }

    /// Die editierbaren Kontrollpunkte in Reihenfolge.
    ///
    /// Der Spiegel-Tail ist ein Auswertungs-Duplikat und wird weder
    /// angezeigt noch zur Selektion angeboten.
    pub fn editable_points(&self) -> &[Vec2] {
        &self.control_points[..self.editable_len()]
    }

    /// Auswertbarer Parameterbereich `[knots[degree], knots[len-1-degree]]`.
    pub fn domain(&self) -> (f32, f32) {
        (
            self.knots[self.degree],
            self.knots[self.knots.len() - 1 - self.degree],
        )
    }

    /// Wertet die Kurve bei `t` mit dem De-Boor-Dreiecksschema aus.
    ///
    /// Der Arbeitspuffer ist eine frische Kopie der `degree + 1`
    /// überlappenden Kontrollpunkte — die Rekurrenz mutiert ihn destruktiv
    /// und darf den gespeicherten Bestand nicht berühren. Die Funktion ist
    /// rein: identischer Zustand und identisches `t` liefern identische
    /// Ergebnisse.
    pub fn evaluate(&self, t: f32) -> Vec2 {
        let k = self.knot_span(t);
        let mut buffer: Vec<Vec2> = self.control_points[k - self.degree..=k].to_vec();

        for r in 1..=self.degree {
            for j in (r..=self.degree).rev() {
                let denom = self.knots[j + 1 + k - r] - self.knots[j + k - self.degree];
                // Bei uniformem Knotenvektor und gültiger Spanne kann der
                // Nenner nicht 0 werden; der Guard fängt degenerierte
                // Spannen trotzdem ab.
                let alpha = if denom.abs() < f32::EPSILON {
                    0.0
                } else {
                    (t - self.knots[j + k - self.degree]) / denom
                };
                buffer[j] = buffer[j - 1] * (1.0 - alpha) + buffer[j] * alpha;
            }
        }

        buffer[self.degree]
    }

    /// Fügt `point` an `index` ein (nachfolgende Punkte rücken auf),
    /// synchronisiert den Spiegel-Tail und leitet den Knotenvektor neu ab.
    pub fn add_control_point(&mut self, point: Vec2, index: usize) -> Result<(), SplineError> {
        if index > self.control_points.len() {
            return Err(SplineError::IndexOutOfRange {
                index,
                len: self.control_points.len(),
            });
        }

        self.control_points.insert(index, point);
        self.sync_mirror_tail();
        self.rebuild_knots();
        Ok(())
    }

    /// Entfernt den Punkt an `index`, synchronisiert den Spiegel-Tail und
    /// leitet den Knotenvektor neu ab.
    ///
    /// Das Modell prüft keine Untergrenze: Der Aufrufer ist dafür
    /// verantwortlich, die editierbare Punktzahl nicht unter 3 zu drücken
    /// (siehe Lösch-Guard im Editor).
    pub fn delete_control_point(&mut self, index: usize) -> Result<(), SplineError> {
        if index >= self.control_points.len() {
            return Err(SplineError::IndexOutOfRange {
                index,
                len: self.control_points.len(),
            });
        }

        self.control_points.remove(index);
        self.sync_mirror_tail();
        self.rebuild_knots();
        Ok(())
    }

    /// Setzt die Position des Punkts an `index`.
    ///
    /// Bei geschlossener Kurve und `index < degree` wird die Bewegung
    /// sofort auf den Spiegelpartner `len - degree + index` übertragen.
    /// Der Knotenvektor bleibt unverändert (Topologie unverändert).
    pub fn move_control_point(&mut self, index: usize, position: Vec2) -> Result<(), SplineError> {
        let len = self.control_points.len();
        if index >= len {
            return Err(SplineError::IndexOutOfRange { index, len });
        }

        self.control_points[index] = position;
        if self.closed && index < self.degree {
            self.control_points[len - self.degree + index] = position;
        }
        Ok(())
    }

    /// Findet die Knotenspanne `k` mit `t ∈ [knots[k], knots[k+1])`.
    ///
    /// An und unterhalb der unteren Bereichsgrenze wird auf Spanne `degree`
    /// geklemmt, an und oberhalb der oberen auf die letzte gültige Spanne.
    /// Dazwischen reicht bei einigen Dutzend Knoten ein linearer Scan.
    fn knot_span(&self, t: f32) -> usize {
        let last = self.knots.len() - 1;
        if t <= self.knots[self.degree] {
            return self.degree;
        }
        if t >= self.knots[last - self.degree] {
            return last - self.degree - 1;
        }

        for i in self.degree..last {
            if t >= self.knots[i] && t < self.knots[i + 1] {
                return i;
            }
        }
        self.degree
    }

    /// Stellt die Schließungs-Invariante wieder her: die letzten `degree`
    /// Punkte werden als Kopien der ersten `degree` Punkte geschrieben.
    fn sync_mirror_tail(&mut self) {
        if !self.closed || self.control_points.len() <= self.degree {
            return;
        }
        for i in 0..self.degree {
            let tail = self.control_points.len() - (self.degree - i);
            self.control_points[tail] = self.control_points[i];
        }
    }

    /// Leitet den uniformen Knotenvektor neu ab: `knots[i] = i / (len - 1)`
    /// über `control_points.len() + degree + 1` Einträge.
    fn rebuild_knots(&mut self) {
        let len = self.control_points.len() + self.degree + 1;
        let last = (len - 1) as f32;
        self.knots = (0..len).map(|i| i as f32 / last).collect();
    }
}
