// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use nummus_model::types::MoneyValue;

fn bench_chain_numeric(c: &mut Criterion) {
    c.bench_function("MoneyValue chain (numeric)", |b| {
        b.iter(|| {
            let mut money = MoneyValue::new(black_box(1_000.0));
            money
                .sum([black_box(250.0), black_box(12.5)])
                .multiply(black_box(3))
                .add_discount(black_box(10), false)
                .add_tax(None);
            money.as_f64()
        });
    });
}

fn bench_chain_grouped_strings(c: &mut Criterion) {
    c.bench_function("MoneyValue chain (grouped strings)", |b| {
        b.iter(|| {
            let mut money = MoneyValue::new(0.0);
            money
                .sum([black_box("1,000"), black_box("2,500.75")])
                .subtract([black_box("12.5")]);
            money.as_f64()
        });
    });
}

fn bench_get(c: &mut Criterion) {
    let mut money = MoneyValue::new(1_234_567.891);
    money.set_locale_active(true).set_locale_code("₺");
    c.bench_function("MoneyValue::get", |b| b.iter(|| black_box(&money).get()));
}

fn bench_all(c: &mut Criterion) {
    let mut money = MoneyValue::new(1_234.5);
    money.add_tax(None);
    c.bench_function("MoneyValue::all", |b| b.iter(|| black_box(&money).all()));
}

criterion_group!(
    benches,
    bench_chain_numeric,
    bench_chain_grouped_strings,
    bench_get,
    bench_all,
);
criterion_main!(benches);
