// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppDroite (etat.rs) pour natif + wasm
// - Clavier : Enter ajoute le point (quand le champ est focus)
// - Boutons préréglés, sélecteur de rang, droite dessinée, liste triée, distance
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;

use super::etat::{AppDroite, RANGS_DISPONIBLES};
use crate::noyau::{classification_display_name, Classification, Point};

/// Entrées proposées en un clic.
const PRESETS: [&str; 12] = [
    "π", "e", "φ", "τ", "√2", "-√3", "sqrt(7)", "π/π", "1/e", "-1/2", "3", "-4",
];

/// Hauteur de la zone de dessin de la droite.
const HAUTEUR_DROITE: f32 = 110.0;

/// Marge horizontale (les étiquettes des bornes restent visibles).
const MARGE_DROITE: f32 = 24.0;

fn couleur(c: Classification) -> egui::Color32 {
    let [r, g, b] = c.couleur();
    egui::Color32::from_rgb(r, g, b)
}

/// Pas des graduations étiquetées selon le rang.
fn pas_graduation(rang: u32) -> u32 {
    match rang {
        0..=10 => 1,
        11..=20 => 2,
        21..=50 => 5,
        _ => 10,
    }
}

impl AppDroite {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Droite numérique");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_droite(ui);
                self.ui_legende(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_liste(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_distance(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Nombre :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: sqrt(7), 2*π, 1/e, √2, -1/2")
                .id_salt("entree_nombre"),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter : egui retire le focus d’un singleline à la validation
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.lost_focus() && enter {
            self.soumettre_entree();
        }

        ui.horizontal(|ui| {
            if ui.button("Ajouter").clicked() {
                self.soumettre_entree();
            }
            if ui
                .button("C")
                .on_hover_text("Efface seulement l’entrée")
                .clicked()
            {
                self.clear_entree();
            }
            if ui
                .button("Tout effacer")
                .on_hover_text("Retire tous les points")
                .clicked()
            {
                self.vider();
            }

            ui.separator();

            ui.label("Rang :");
            let mut rang = self.rang;
            egui::ComboBox::from_id_salt("rang_droite")
                .selected_text(format!("±{rang}"))
                .show_ui(ui, |ui| {
                    for r in RANGS_DISPONIBLES {
                        ui.selectable_value(&mut rang, r, format!("±{r}"));
                    }
                });
            if rang != self.rang {
                self.set_rang(rang);
            }
        });

        ui.horizontal_wrapped(|ui| {
            for p in PRESETS {
                if ui.add_sized([52.0, 26.0], egui::Button::new(p)).clicked() {
                    self.ajouter_preset(p);
                    self.focus_entree = true;
                }
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_droite(&self, ui: &mut egui::Ui) {
        let largeur = ui.available_width();
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(largeur, HAUTEUR_DROITE), egui::Sense::hover());
        let painter = ui.painter_at(rect);

        let trait_couleur = ui.visuals().text_color();
        let faible = ui.visuals().weak_text_color();
        let police = egui::FontId::proportional(11.0);

        let rang = self.rang as f32;
        let gauche = rect.left() + MARGE_DROITE;
        let droite = rect.right() - MARGE_DROITE;
        let y = rect.center().y;
        let vers_x = |v: f64| gauche + (v as f32 + rang) / (2.0 * rang) * (droite - gauche);

        painter.line_segment(
            [egui::pos2(gauche, y), egui::pos2(droite, y)],
            egui::Stroke::new(2.0, trait_couleur),
        );

        // Graduations : toutes les unités si la place le permet, étiquettes au pas choisi
        let pas = pas_graduation(self.rang) as i64;
        let unite = (droite - gauche) / (2.0 * rang);
        let r = self.rang as i64;
        for k in -r..=r {
            let etiquetee = k % pas == 0;
            if !etiquetee && unite < 4.0 {
                continue;
            }
            let x = vers_x(k as f64);
            let h = if etiquetee { 6.0 } else { 3.0 };
            painter.line_segment(
                [egui::pos2(x, y - h), egui::pos2(x, y + h)],
                egui::Stroke::new(1.0, if etiquetee { trait_couleur } else { faible }),
            );
            if etiquetee {
                painter.text(
                    egui::pos2(x, y + 9.0),
                    egui::Align2::CENTER_TOP,
                    k.to_string(),
                    police.clone(),
                    faible,
                );
            }
        }

        // Points : étiquettes alternées au-dessus pour limiter les chevauchements
        for (rangee, (_, p)) in self.points_tries().into_iter().enumerate() {
            let x = vers_x(p.valeur);
            let c = couleur(p.classification);
            painter.circle_filled(egui::pos2(x, y), 5.0, c);

            let dy = if rangee % 2 == 0 { 12.0 } else { 30.0 };
            painter.text(
                egui::pos2(x, y - dy),
                egui::Align2::CENTER_BOTTOM,
                p.libelle(),
                police.clone(),
                c,
            );
        }
    }

    fn ui_legende(&self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for c in Classification::TOUTES {
                ui.colored_label(couleur(c), format!("● {}", classification_display_name(c)));
            }
        });
    }

    fn ui_liste(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("Points ({}) :", self.points.len()));

        if self.points.is_empty() {
            ui.weak("aucun point");
            return;
        }

        let mut a_retirer = None;
        egui::Grid::new("liste_points")
            .num_columns(3)
            .spacing([12.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                for (i, p) in self.points_tries() {
                    ui.colored_label(couleur(p.classification), &p.texte_original);
                    ui.monospace(format!("{:.6}  {}", p.valeur, p.classification));
                    if ui.small_button("Retirer").clicked() {
                        a_retirer = Some(i);
                    }
                    ui.end_row();
                }
            });

        if let Some(i) = a_retirer {
            self.retirer(i);
        }
    }

    fn ui_distance(&mut self, ui: &mut egui::Ui) {
        ui.label("Distance entre deux points :");

        ui.horizontal(|ui| {
            choix_point(ui, "distance_a", "a", &self.points, &mut self.selection_a);
            choix_point(ui, "distance_b", "b", &self.points, &mut self.selection_b);

            if ui.button("Calculer").clicked() {
                self.calculer_distance();
            }
        });

        if !self.resultat_distance.is_empty() {
            ui.monospace(&self.resultat_distance);
        }
    }
}

/// Liste déroulante d’un point (indice d’insertion).
fn choix_point(
    ui: &mut egui::Ui,
    id: &str,
    nom: &str,
    points: &[Point],
    selection: &mut Option<usize>,
) {
    let texte = selection
        .and_then(|i| points.get(i))
        .map_or_else(|| "—".to_string(), |p| p.texte_original.clone());

    ui.label(format!("{nom} :"));
    egui::ComboBox::from_id_salt(id)
        .selected_text(texte)
        .show_ui(ui, |ui| {
            for (i, p) in points.iter().enumerate() {
                ui.selectable_value(selection, Some(i), p.libelle());
            }
        });
}
