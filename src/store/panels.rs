// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use crate::model::{LatLng, Marker, PlaceId, ScreenAnchor};

/// Detail card for one place.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    pub place: PlaceId,
    pub anchor: ScreenAnchor,
}

/// List popup for a cluster badge.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupPanel {
    pub members: Vec<Marker>,
    pub anchor: ScreenAnchor,
}

/// "Register this place?" card shown for a search pick or a modifier-click on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewPlace {
    pub position: LatLng,
    pub name: String,
    pub address: String,
}

/// Pre-filled input for the new-place form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPlaceDraft {
    pub position: LatLng,
    pub name: String,
    pub address: String,
}

/// Which floating panels are open. The detail card and the group popup are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    detail: Option<DetailPanel>,
    group: Option<GroupPanel>,
    preview: Option<PreviewPlace>,
    draft: Option<NewPlaceDraft>,
}

impl PanelState {
    pub fn detail(&self) -> Option<&DetailPanel> {
        self.detail.as_ref()
    }

    pub fn group(&self) -> Option<&GroupPanel> {
        self.group.as_ref()
    }

    pub fn preview(&self) -> Option<&PreviewPlace> {
        self.preview.as_ref()
    }

    pub fn draft(&self) -> Option<&NewPlaceDraft> {
        self.draft.as_ref()
    }

    /// A cluster badge opens the list popup; a single marker opens its detail card.
    pub fn marker_click(&mut self, members: &[Marker], anchor: ScreenAnchor) {
        match members {
            [] => {}
            [single] => {
                self.group = None;
                self.detail = Some(DetailPanel { place: single.id(), anchor });
            }
            _ => {
                self.detail = None;
                self.group = Some(GroupPanel { members: members.to_vec(), anchor });
            }
        }
    }

    /// Opens the detail card for a group member at the popup's anchor.
    pub fn select_group_member(&mut self, id: PlaceId) -> bool {
        let Some(group) = self.group.as_ref() else {
            return false;
        };
        if !group.members.iter().any(|m| m.id() == id) {
            return false;
        }
        let anchor = group.anchor;
        self.group = None;
        self.detail = Some(DetailPanel { place: id, anchor });
        true
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn close_group(&mut self) {
        self.group = None;
    }

    pub fn clear_detail_panels(&mut self) {
        self.detail = None;
        self.group = None;
    }

    pub fn clear_panels(&mut self) {
        self.clear_detail_panels();
        self.preview = None;
    }

    pub fn open_preview(&mut self, preview: PreviewPlace) {
        self.preview = Some(preview);
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
    }

    /// Turns the open preview into a form draft.
    pub fn register_preview(&mut self) -> Option<&NewPlaceDraft> {
        let preview = self.preview.take()?;
        self.draft = Some(NewPlaceDraft {
            position: preview.position,
            name: preview.name,
            address: preview.address,
        });
        self.draft.as_ref()
    }

    pub fn close_form(&mut self) {
        self.draft = None;
    }

    /// Drops panels that refer to a place that no longer exists.
    pub(crate) fn forget_place(&mut self, id: PlaceId) {
        if self.detail.as_ref().is_some_and(|d| d.place == id) {
            self.detail = None;
        }
        if let Some(group) = self.group.as_mut() {
            group.members.retain(|m| m.id() != id);
            if group.members.len() < 2 {
                self.group = None;
            }
        }
    }
}
