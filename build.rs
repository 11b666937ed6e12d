// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

// Use the "built" crate to record the git hash, compiler version and build
// time so that `ata-tools` can report what it is at start-up.
fn main() {
    built::write_built_file().expect("Failed to acquire build-time information");
}
