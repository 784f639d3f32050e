// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Enter trace (quand le champ a le focus), bouton "Tracer" idem
// - bornes min/max en DragValue (nombres déjà valides pour le noyau)
// - graphe dessiné au Painter : axes + polyligne coupée aux valeurs non finies
// - boutons d’insertion : x, sin( cos( tan(, opérateurs entourés d’espaces

use eframe::egui;

use super::etat::{AppTraceur, BORNE_MAX};
use crate::noyau::Courbe;

/// Hauteur du graphe (la largeur suit le panneau).
const HAUTEUR_GRAPHE: f32 = 360.0;

impl AppTraceur {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Traceur f(x)");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if let Some(c) = &self.courbe {
                    ui.label(&c.titre);
                    Self::ui_graphe(ui, c);
                }

                ui.add_space(8.0);
                egui::CollapsingHeader::new("Démarche")
                    .default_open(false)
                    .show(ui, |ui| {
                        ui.label("RPN :");
                        ui.monospace(&self.demarche);
                    });
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("f(x) =");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2*x^2 + 3x - 1, 2*sin(3*x) / x, 2^x")
                .id_source("entree_fx")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter : seulement si le champ a (ou vient de perdre) le focus
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.tracer();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let (mut min_x, mut max_x) = (self.min_x, self.max_x);
            ui.label("x min :");
            let r1 = ui.add(
                egui::DragValue::new(&mut min_x)
                    .speed(0.1)
                    .range(-BORNE_MAX..=BORNE_MAX),
            );
            ui.label("x max :");
            let r2 = ui.add(
                egui::DragValue::new(&mut max_x)
                    .speed(0.1)
                    .range(-BORNE_MAX..=BORNE_MAX),
            );
            if r1.changed() || r2.changed() {
                self.set_bornes(min_x, max_x);
            }

            ui.separator();

            if ui.add_sized([72.0, 30.0], egui::Button::new("Tracer")).clicked() {
                self.tracer();
            }
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface courbe + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
        });

        ui.add_space(6.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "x", "x", InsertKind::Brut);
            self.bouton_insert(ui, "^", "^", InsertKind::Brut);
            self.bouton_insert(ui, "sin", "sin(", InsertKind::Brut);
            self.bouton_insert(ui, "cos", "cos(", InsertKind::Brut);
            self.bouton_insert(ui, "tan", "tan(", InsertKind::Brut);
            self.bouton_insert(ui, ")", ")", InsertKind::Brut);

            ui.separator();

            for op in ["+", "-", "*", "/"] {
                self.bouton_insert(ui, op, op, InsertKind::Op);
            }

            ui.separator();

            for d in ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "."] {
                self.bouton_insert(ui, d, d, InsertKind::Brut);
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /// Graphe : échelle sur le rectangle, y bornés par les valeurs finies.
    fn ui_graphe(ui: &mut egui::Ui, courbe: &Courbe) {
        let taille = egui::vec2(ui.available_width(), HAUTEUR_GRAPHE);
        let (rect, _resp) = ui.allocate_exact_size(taille, egui::Sense::hover());
        let painter = ui.painter_at(rect);

        let fond = ui.visuals().extreme_bg_color;
        let trait_axes = egui::Stroke::new(1.0, ui.visuals().weak_text_color());
        let trait_courbe = egui::Stroke::new(1.5, ui.visuals().hyperlink_color);
        painter.rect_filled(rect, egui::CornerRadius::ZERO, fond);

        if courbe.domaine.is_empty() {
            return;
        }
        let xs = courbe.domaine.points();
        let (Some(&x0), Some(&x1)) = (xs.first(), xs.last()) else {
            return;
        };
        let Some((y0, y1)) = bornes_y(&courbe.valeurs) else {
            return;
        };

        let vers_ecran = |x: f64, y: f64| {
            let u = ((x - x0) / (x1 - x0)) as f32;
            let v = ((y - y0) / (y1 - y0)) as f32;
            egui::pos2(
                rect.left() + u * rect.width(),
                rect.bottom() - v * rect.height(),
            )
        };

        // Axes (si visibles)
        if (y0..=y1).contains(&0.0) {
            painter.line_segment([vers_ecran(x0, 0.0), vers_ecran(x1, 0.0)], trait_axes);
        }
        if (x0..=x1).contains(&0.0) {
            painter.line_segment([vers_ecran(0.0, y0), vers_ecran(0.0, y1)], trait_axes);
        }

        // Polylignes : une par segment de valeurs finies
        let mut segment: Vec<egui::Pos2> = Vec::new();
        for (x, y) in courbe.points() {
            if y.is_finite() {
                segment.push(vers_ecran(x, y));
            } else if !segment.is_empty() {
                painter.add(egui::Shape::line(std::mem::take(&mut segment), trait_courbe));
            }
        }
        if !segment.is_empty() {
            painter.add(egui::Shape::line(segment, trait_courbe));
        }

        let police = egui::FontId::monospace(11.0);
        let couleur = ui.visuals().text_color();
        painter.text(
            rect.left_top() + egui::vec2(4.0, 2.0),
            egui::Align2::LEFT_TOP,
            format!("y ∈ [{y0:.3}, {y1:.3}]"),
            police.clone(),
            couleur,
        );
        painter.text(
            rect.left_bottom() + egui::vec2(4.0, -2.0),
            egui::Align2::LEFT_BOTTOM,
            format!("x ∈ [{x0}, {x1}]"),
            police,
            couleur,
        );
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([48.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str, kind: InsertKind) {
        let resp = ui.add_sized([40.0, 28.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match kind {
            InsertKind::Op => {
                // un opérateur binaire n’existe que sous la forme " op "
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(to_insert);
                self.entree.push(' ');
            }
            InsertKind::Brut => self.entree.push_str(to_insert),
        }

        self.focus_entree = true;
    }
}

/// Bornes y sur les valeurs finies ; élargies si la courbe est plate.
fn bornes_y(valeurs: &[f64]) -> Option<(f64, f64)> {
    let (lo, hi) = valeurs
        .iter()
        .copied()
        .filter(|y| y.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })?;

    if hi - lo < 1e-12 {
        Some((lo - 1.0, hi + 1.0))
    } else {
        Some((lo, hi))
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Brut,
    Op,
}
