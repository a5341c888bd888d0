// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::PackagistError;

pub fn get_exit_code(error: &PackagistError) -> i32 {
    match error {
        PackagistError::InvalidArgument(_) | PackagistError::ConfigError(_) => 2,

        PackagistError::HttpStatus { status: 404, .. } => 4,

        PackagistError::Http(_) | PackagistError::HttpStatus { .. } => 20,

        PackagistError::Io(e)
            if matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::ConnectionRefused
            ) =>
        {
            20
        }

        PackagistError::Json(_) => 65, // EX_DATAERR

        _ => 1,
    }
}
