// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use viewfinder_camera::CameraState;

/// A remembered view: the camera, and the section it was centred on.
///
/// With the `serde` feature this can be stored by the host between visits.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewPreferences {
    /// Camera at the time the preference was taken.
    pub camera: CameraState,
    /// Id of the active section, if any.
    pub section: Option<String>,
}
