// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Category and grade filtering for the marker layer.

use std::collections::BTreeSet;

use crate::model::{Marker, PlaceType};

/// Grades a fresh session shows: favourites and recommendations.
pub const DEFAULT_GRADES: [u8; 2] = [1, 2];
const ALL_GRADES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerFilter {
    types: BTreeSet<PlaceType>,
    grades: BTreeSet<u8>,
}

impl Default for MarkerFilter {
    fn default() -> Self {
        Self {
            types: PlaceType::PUBLIC.into_iter().collect(),
            grades: DEFAULT_GRADES.into_iter().collect(),
        }
    }
}

impl MarkerFilter {
    pub fn selected_types(&self) -> &BTreeSet<PlaceType> {
        &self.types
    }

    pub fn selected_grades(&self) -> &BTreeSet<u8> {
        &self.grades
    }

    pub fn is_selected(&self, place_type: PlaceType) -> bool {
        self.types.contains(&place_type)
    }

    fn all_public_selected(&self) -> bool {
        PlaceType::PUBLIC.iter().all(|t| self.types.contains(t))
    }

    /// Applies a chip click. `None` is the "all" chip.
    ///
    /// Personal types flip independently. A public type clicked while every public type is on
    /// isolates that type.
    pub fn toggle(&mut self, place_type: Option<PlaceType>) {
        let Some(place_type) = place_type else {
            if self.all_public_selected() {
                for t in PlaceType::PUBLIC {
                    self.types.remove(&t);
                }
            } else {
                self.types.extend(PlaceType::PUBLIC);
            }
            return;
        };

        if !place_type.is_personal() && self.all_public_selected() {
            for t in PlaceType::PUBLIC {
                self.types.remove(&t);
            }
            self.types.insert(place_type);
            return;
        }

        if !self.types.remove(&place_type) {
            self.types.insert(place_type);
        }
    }

    /// Replaces the grade selection. Grades outside 1..=3 are ignored.
    pub fn set_grades(&mut self, grades: impl IntoIterator<Item = u8>) {
        self.grades = grades.into_iter().filter(|g| (1..=3).contains(g)).collect();
    }

    pub fn enable_my_footprint(&mut self) {
        self.types.insert(PlaceType::MyFootprint);
    }

    pub fn disable_personal_types(&mut self) {
        for t in PlaceType::PERSONAL {
            self.types.remove(&t);
        }
    }

    /// Whether `marker` passes the filter for a viewer who is (or is not) signed in.
    ///
    /// Grades only narrow public categories; personal markers ignore them.
    pub fn accepts(&self, marker: &Marker, authenticated: bool) -> bool {
        let place_type = marker.place_type();
        if place_type.is_personal() {
            return authenticated && self.types.contains(&place_type);
        }
        if !self.types.contains(&place_type) {
            return false;
        }
        match self.grades.len() {
            0 => false,
            ALL_GRADES => true,
            _ => marker.grade().is_some_and(|g| self.grades.contains(&g)),
        }
    }

    pub fn visible<'a>(
        &'a self,
        markers: &'a [Marker],
        authenticated: bool,
    ) -> impl Iterator<Item = &'a Marker> + 'a {
        markers.iter().filter(move |m| self.accepts(m, authenticated))
    }
}
