// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod xlsx_tests;

pub const HEADER: &str = "MODELO,DESDE,HASTA,POTENCIA,0,1,2,3,4,5,6,7,8,9,10,11,12";

pub fn sample_csv() -> String {
    format!(
        "{HEADER}\n\
         911,2015,2019,400,80000,70000,60000,50000,45000,40000,35000,30000,26000,22000,18000,15000,12000\n\
         Cayenne,,,340,90000,80000,70000,62000,55000,48000,42000,37000,32000,28000,24000,20000,17000\n\
         Macan,2014,2018,,60000,52000,46000,41000,37000,33000,30000,27000,24000,21000,18000,16000,14000\n"
    )
}
