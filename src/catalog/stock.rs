//! Stock parts database.
//!
//! The full set of parts obtainable in the game, with their raw stat
//! contributions. Stat numbers are game data, not engine logic; an updated
//! balance patch only touches this file.

use super::pools::PartCatalog;
use super::types::{Part, Slot, StatKey};

use StatKey::*;

impl PartCatalog {
    /// The full stock catalog: every part in the game.
    ///
    /// Callers with a partial inventory derive a sub-catalog via
    /// [`PartCatalog::filter`].
    pub fn stock() -> PartCatalog {
        PartCatalog::new(stock_parts()).expect("stock parts database is a valid catalog")
    }
}

/// Every stock part as a flat list, grouped by slot.
pub fn stock_parts() -> Vec<Part> {
    let mut parts = Vec::with_capacity(86);

    // Engines
    parts.extend([
        Part::new(Slot::Engine, "Advanced Engine", &[(T3, 1.0), (DriftSteer, 1.0), (Steer, 1.0), (AirDriftTime, 0.2), (Speed, 1.0), (SlipStreamRadius, 20.0), (SlipStreamSpd, 3.5)]),
        Part::new(Slot::Engine, "Banker Engine", &[(BoostPads, 10.0), (T2, -0.5), (StartBoost, -5.0), (StartCoins, 3.0), (MaxCoins, 10.0), (MaxCoinsSpd, 2.0), (DriftSteer, -2.0), (Steer, -2.0), (Speed, -0.2)]),
        Part::new(Slot::Engine, "Basic Engine", &[(Speed, 0.5)]),
        Part::new(Slot::Engine, "Scrapwork Engine", &[(T1, -0.8), (T2, -1.0), (T3, 0.5), (DriftSteer, -5.0), (Steer, -4.0), (Speed, 1.6), (SlipStreamRadius, 35.0), (SlipStreamSpd, 2.0)]),
        Part::new(Slot::Engine, "Chrome Engine", &[(T3, 1.6), (StartBoost, 10.0), (Speed, 0.5)]),
        Part::new(Slot::Engine, "Clean Engine", &[(T1, 0.4), (T2, 0.5), (DriftSteer, 0.5), (Steer, 0.5), (SlipStreamRadius, 100.0), (TrickSpd, 5.0)]),
        Part::new(Slot::Engine, "Cyber Engine", &[(T3, 1.2), (DriftSteer, 0.5), (Steer, 0.5), (Speed, 0.5), (SlipStreamSpd, 5.0)]),
        Part::new(Slot::Engine, "Featherweight Engine", &[(T1, 0.8), (DriftSteer, 1.0), (Steer, 1.0), (AirDriftTime, 0.2), (Speed, 0.3), (Daze, -12.0), (SlipStreamRadius, 30.0), (TrickSpd, 5.0)]),
        Part::new(Slot::Engine, "Fresh Engine", &[(BoostPads, 4.0), (MaxCoinsSpd, 0.2), (Speed, 0.3), (TrickSpd, 3.2)]),
        Part::new(Slot::Engine, "Frontrunner Engine", &[(T3, 1.0), (StartBoost, 15.0), (CoinBoostSpd, 10.0), (CoinBoostTime, 0.5), (StartCoins, 1.0), (MaxCoins, -1.0), (MaxCoinsSpd, 1.4), (Speed, -0.2)]),
        Part::new(Slot::Engine, "Spooky Engine", &[(T1, 0.6), (StartBoost, 10.0), (Speed, 0.6), (TrickSpd, 3.0)]),
        Part::new(Slot::Engine, "Heavyweight Engine", &[(CoinBoostSpd, 5.0), (CoinBoostTime, 0.5), (StartCoins, 2.0), (MaxCoins, 5.0), (MaxCoinsSpd, 0.8), (DriftSteer, -4.5), (Steer, -3.5), (Speed, 1.3), (Daze, 50.0), (TrickSpd, -3.0)]),
        Part::new(Slot::Engine, "Vulcan Engine", &[(DriftRate, 2.5), (T3, 1.0), (MaxCoins, -1.0), (MaxCoinsSpd, 0.5), (DriftSteer, -0.5), (Steer, -2.0), (Speed, 0.5), (Daze, 100.0)]),
        Part::new(Slot::Engine, "No Coiner Engine", &[(T2, 1.5), (T3, 1.0), (CoinBoostSpd, -10.0), (MaxCoins, -2.0), (MaxCoinsSpd, -5.2), (Speed, 3.2), (TrickSpd, 4.0)]),
        Part::new(Slot::Engine, "Piggybank Engine", &[(StartCoins, 2.0), (MaxCoins, 10.0), (MaxCoinsSpd, 4.5), (Speed, -2.7)]),
        Part::new(Slot::Engine, "Scrap Engine", &[(T1, 0.4), (T2, 0.5), (T3, 0.5), (TrickSpd, 3.5)]),
        Part::new(Slot::Engine, "Silver Engine", &[(T1, 0.5), (T2, 0.7), (T3, 1.4)]),
        Part::new(Slot::Engine, "Snail Engine", &[(BoostPads, 10.0), (Speed, -2.5), (SlowAreaPenalty, 50.0), (Daze, -30.0), (UltCharge, 8.0), (UltStart, 18.0), (SlipStreamRadius, 30.0), (SlipStreamSpd, 7.0), (SlipTime, 0.8)]),
        Part::new(Slot::Engine, "Starter Engine", &[(T1, 0.8), (CoinBoostTime, 1.0), (MaxCoinsSpd, 0.6), (Speed, 0.6)]),
    ]);

    // Exhausts
    parts.extend([
        Part::new(Slot::Exhaust, "Acrobatic Exhaust", &[(CoinBoostTime, 1.0), (DriftSteer, 1.2), (Steer, 1.2), (AirDriftTime, 0.13), (TrickSpd, 2.0)]),
        Part::new(Slot::Exhaust, "Ice Exhaust", &[(CoinBoostSpd, 5.0), (CoinBoostTime, 0.6), (Speed, 0.5), (T1, 0.8), (T3, 1.0)]),
        Part::new(Slot::Exhaust, "Discharged Exhaust", &[(Speed, 1.6), (UltCharge, -20.0), (UltStart, 10.0), (TrickSpd, 2.5)]),
        Part::new(Slot::Exhaust, "Cyber Exhaust", &[(UltStart, 17.0), (TrickSpd, 3.5)]),
        Part::new(Slot::Exhaust, "Iron Exhaust", &[(StartBoost, 10.0), (CoinBoostSpd, -5.0), (CoinBoostTime, 2.5), (UltCharge, 5.0), (SlipStreamRadius, 25.0), (SlipTime, 1.2), (BoostPads, 5.0), (SlipStreamSpd, 3.5)]),
        Part::new(Slot::Exhaust, "Light Exhaust", &[(CoinBoostTime, 1.0), (MaxCoinsSpd, 0.2), (AirDriftTime, 0.15), (UltStart, 10.0), (SlipStreamRadius, 15.0), (SlipStreamSpd, 3.0), (TrickSpd, 5.0)]),
        Part::new(Slot::Exhaust, "Fresh Exhaust", &[(CoinBoostSpd, 5.0), (CoinBoostTime, 0.3), (DriftSteer, 0.2), (AirDriftTime, 0.1), (SlipStreamSpd, 4.0), (SlipTime, 0.3)]),
        Part::new(Slot::Exhaust, "Spooky Exhaust", &[(CoinBoostTime, -0.5), (MaxCoinsSpd, 1.6), (AirDriftTime, 0.2), (SlipStreamRadius, 30.0), (SlipTime, 1.0), (T1, 0.4)]),
        Part::new(Slot::Exhaust, "Heavy Exhaust", &[(CoinBoostTime, 1.0), (StartCoins, 1.0), (MaxCoins, 2.0), (MaxCoinsSpd, 1.0), (BoostPads, 20.0)]),
        Part::new(Slot::Exhaust, "Simple Coin Exhaust", &[(CoinBoostSpd, 3.0), (CoinBoostTime, 0.5)]),
        Part::new(Slot::Exhaust, "Starter Exhaust", &[(CoinBoostSpd, 5.0), (CoinBoostTime, 0.3), (Speed, 0.3), (T2, 1.0)]),
        Part::new(Slot::Exhaust, "Polished Exhaust", &[(CoinBoostTime, 1.3), (AirDriftTime, 0.1), (Speed, 0.25), (SlipStreamRadius, 18.0), (SlipStreamSpd, 2.0), (SlipTime, 1.4), (BoostPads, 13.0), (TrickSpd, 3.0)]),
        Part::new(Slot::Exhaust, "Ulti-Matey Exhaust", &[(UltCharge, 7.5), (UltStart, 20.0)]),
        Part::new(Slot::Exhaust, "Gold Exhaust", &[(AirDriftTime, 0.25), (TrickSpd, 7.5)]),
    ]);

    // Suspensions
    parts.extend([
        Part::new(Slot::Suspension, "Acrobatic Suspension", &[(BoostPads, 10.0), (CoinBoostSpd, 5.0), (DriftSteer, 2.0), (Steer, 2.0), (AirDriftTime, 0.25), (Speed, -0.6), (SlipStreamRadius, 5.0), (SlipStreamSpd, 3.5), (SlipTime, 0.5), (TrickSpd, 3.5)]),
        Part::new(Slot::Suspension, "Advanced Suspension", &[(T1, 0.8), (T3, 0.5), (DriftSteer, 1.5), (Steer, 1.5), (AirDriftTime, 0.3), (UltStart, 10.0)]),
        Part::new(Slot::Suspension, "Ice Suspension", &[(T2, 1.0), (StartBoost, -5.0), (DriftSteer, -1.5), (Steer, -1.5), (AirDriftTime, 0.2), (Speed, 1.0), (SlowAreaPenalty, 0.3), (TrickSpd, 3.0)]),
        Part::new(Slot::Suspension, "First Charge Suspension", &[(T1, 3.2), (T2, -2.0), (T3, -2.0), (DriftSteer, 0.5), (Steer, 0.5), (Daze, -6.0), (UltCharge, 3.0)]),
        Part::new(Slot::Suspension, "Fresh Suspension", &[]),
        Part::new(Slot::Suspension, "Spooky Suspension", &[(BoostPads, 5.0), (T1, 1.0), (MaxCoinsSpd, 0.8), (DriftSteer, 2.0), (Steer, 2.0), (AirDriftTime, 0.1), (Speed, 0.2), (SlowAreaPenalty, 0.3), (Daze, -20.0)]),
        Part::new(Slot::Suspension, "Slime Suspension", &[(T1, 1.6), (T2, 0.5), (T3, -0.5), (StartBoost, 8.0), (StartCoins, 1.0), (SlipStreamRadius, 10.0), (SlipStreamSpd, 5.5)]),
        Part::new(Slot::Suspension, "Locked Suspension", &[(Speed, 1.2), (Daze, 60.0)]),
        Part::new(Slot::Suspension, "No Drift Suspension", &[(T1, -0.6), (T2, -0.8), (T3, -1.2), (CoinBoostSpd, 5.0), (DriftSteer, -5.0), (Steer, 30.0), (Speed, 2.0), (Daze, 10.0)]),
        Part::new(Slot::Suspension, "Peanutician Suspension", &[(T1, 0.8), (DriftSteer, 2.2), (Steer, 2.2), (AirDriftTime, 1.0), (SlowAreaPenalty, 0.6)]),
        Part::new(Slot::Suspension, "Snail Suspension", &[(BoostPads, 10.0), (DriftSteer, -1.0), (Steer, -1.0), (Daze, -10.0), (UltCharge, 3.0)]),
        Part::new(Slot::Suspension, "Starter Suspension", &[(DriftSteer, 1.2), (Steer, 1.2), (Daze, -15.0), (UltStart, 7.0)]),
        Part::new(Slot::Suspension, "Train Suspension", &[(BoostPads, 15.0), (T1, 0.3), (T2, 0.3), (T3, 0.3), (StartBoost, 15.0), (DriftSteer, -2.0), (Steer, -2.0), (AirDriftTime, 0.2), (Speed, 1.3), (Daze, 25.0), (UltCharge, 3.0)]),
        Part::new(Slot::Suspension, "Polished Suspension", &[(BoostPads, 5.0), (DriftSteer, 0.5), (Steer, 0.5), (Speed, 0.5), (Daze, -15.0)]),
    ]);

    // Gearboxes
    parts.extend([
        Part::new(Slot::Gearbox, "Advanced Gearbox", &[(T1, 1.0), (T2, 0.6), (T3, 1.5), (DriftSteer, 0.5)]),
        Part::new(Slot::Gearbox, "Chaotic Gearbox", &[(T1, -1.6), (T2, 3.2), (T3, -2.0), (Daze, -10.0)]),
        Part::new(Slot::Gearbox, "Gamers Gearbox", &[(T1, -1.0), (T2, 0.5), (T3, 1.85), (AirDriftTime, 0.4)]),
        Part::new(Slot::Gearbox, "Fresh Gearbox", &[(T1, 0.3), (T2, 0.4), (T3, 0.6), (AirDriftTime, 0.1)]),
        Part::new(Slot::Gearbox, "The Front Runner", &[(T1, 0.4), (T2, 0.7), (T3, 1.2), (StartBoost, 12.0)]),
        Part::new(Slot::Gearbox, "Grass Gearbox", &[(T1, 0.4), (T2, 0.5), (T3, 1.0)]),
        Part::new(Slot::Gearbox, "Spooky Gearbox", &[(T1, 0.4), (T2, 2.0), (T3, 0.6), (AirDriftTime, 0.1)]),
        Part::new(Slot::Gearbox, "Dragon Head Gearbox", &[(T1, 1.8), (T3, 1.0), (StartBoost, 5.0), (CoinBoostTime, 1.0), (StartCoins, 1.0)]),
        Part::new(Slot::Gearbox, "Efficient Gearbox", &[(BoostPads, 7.5), (T1, 2.1), (T2, 1.0), (T3, -1.2), (StartBoost, 10.0), (DriftSteer, -0.5), (Steer, -0.5), (Speed, 0.5), (SlipStreamRadius, 20.0), (SlipStreamSpd, 3.5), (TrickSpd, 2.5)]),
        Part::new(Slot::Gearbox, "Ice Gearbox", &[(DriftSteer, 1.0), (Steer, 1.0), (Speed, 1.0)]),
        Part::new(Slot::Gearbox, "No Drift Gearbox", &[(T1, -0.8), (T2, -1.0), (T3, -2.0), (Speed, 2.5), (Daze, -12.0), (UltStart, 20.0), (SlipStreamRadius, 10.0), (SlipStreamSpd, 3.5), (SlipTime, 1.0)]),
        Part::new(Slot::Gearbox, "Razor Gearbox", &[(T1, 1.4), (T3, 0.4), (DriftSteer, -0.5), (Steer, -0.5)]),
        Part::new(Slot::Gearbox, "Recovery Gold Gearbox", &[(T1, 1.8), (Daze, -30.0)]),
        Part::new(Slot::Gearbox, "Marine Gearbox", &[(T1, 1.2), (Daze, -20.0)]),
        Part::new(Slot::Gearbox, "Starter Gearbox", &[(DriftRate, -2.5), (T1, 0.4), (T2, 0.5), (T3, 1.0), (DriftSteer, 1.0), (Steer, 1.0)]),
        Part::new(Slot::Gearbox, "Hasty Gearbox", &[(DriftRate, 2.5), (T1, -1.6), (T2, 2.0), (T3, 1.35)]),
        Part::new(Slot::Gearbox, "Ancient Gearbox", &[(T1, 0.85), (T2, 1.3), (T3, 1.1)]),
        Part::new(Slot::Gearbox, "Polished Gearbox", &[(DriftRate, 10.0), (T1, -0.8), (T2, -1.0), (T3, -1.0)]),
    ]);

    // Trinkets
    parts.extend([
        Part::new(Slot::Trinket, "Electronic Key", &[(DriftSteer, 0.5), (Steer, 0.5), (UltCharge, 5.0), (SlipStreamRadius, 10.0), (SlipStreamSpd, 3.0)]),
        Part::new(Slot::Trinket, "Gold Tags", &[(BoostPads, 15.0), (T3, 1.0), (StartCoins, 1.0), (SlipStreamRadius, 20.0)]),
        Part::new(Slot::Trinket, "Skull Collar", &[(StartBoost, -15.0), (MaxCoins, 5.0), (MaxCoinsSpd, 0.8), (Daze, -10.0), (UltCharge, 5.0)]),
        Part::new(Slot::Trinket, "Turtle Trinket", &[(CoinBoostSpd, 10.0), (CoinBoostTime, 1.0), (DriftSteer, 2.0), (Steer, 2.0), (UltCharge, 3.0), (TrickSpd, 2.0)]),
        Part::new(Slot::Trinket, "Tank Trinket", &[(T2, 1.0), (T3, 1.0), (StartBoost, -5.0), (MaxCoinsSpd, 0.4), (DriftSteer, -2.0), (Speed, 0.4), (SlowAreaPenalty, -20.0), (Daze, 5.0)]),
        Part::new(Slot::Trinket, "Capytulator", &[(BoostPads, 17.5), (MaxCoinsSpd, 0.5), (Daze, 60.0), (UltCharge, 5.0)]),
        Part::new(Slot::Trinket, "Air Freshener", &[(T1, 1.6), (TrickSpd, 8.0)]),
        Part::new(Slot::Trinket, "Fast Runner", &[(T1, 1.6)]),
        Part::new(Slot::Trinket, "Cauldron", &[(T1, 0.5), (T2, 0.4), (T3, 0.3), (CoinBoostTime, 0.5), (Speed, 1.0)]),
        Part::new(Slot::Trinket, "Fire Keys", &[(T1, 0.8), (T2, 0.4), (T3, 0.4), (StartCoins, 1.0), (MaxCoins, 1.0), (MaxCoinsSpd, 0.5), (SlowAreaPenalty, -20.0), (UltStart, 10.0), (SlipStreamRadius, 15.0), (SlipStreamSpd, 5.5)]),
        Part::new(Slot::Trinket, "Lucky Dice", &[(T1, 1.6), (StartBoost, 8.0), (StartCoins, 2.0), (UltStart, 15.0), (SlipStreamRadius, 12.0), (SlipStreamSpd, 20.0), (SlipTime, 1.0)]),
        Part::new(Slot::Trinket, "Inheritance", &[(StartCoins, 5.0), (MaxCoinsSpd, -0.5)]),
        Part::new(Slot::Trinket, "Voodoo", &[(MaxCoins, -1.0)]),
        Part::new(Slot::Trinket, "Community Card", &[(BoostPads, 5.0), (T1, 0.6), (T2, 0.4), (T3, 0.5), (CoinBoostTime, 0.5), (MaxCoinsSpd, 0.25), (AirDriftTime, 0.07), (Speed, 0.25)]),
        Part::new(Slot::Trinket, "Ducky", &[(SlowAreaPenalty, -20.0), (SlipStreamRadius, 25.0), (SlipStreamSpd, 6.5), (SlipTime, 3.0)]),
        Part::new(Slot::Trinket, "Anchor", &[(BoostPads, 10.0), (SlowAreaPenalty, 50.0), (Daze, -20.0), (UltStart, 10.0)]),
        Part::new(Slot::Trinket, "Disco Ball", &[(BoostPads, 12.0), (CoinBoostSpd, 15.0), (CoinBoostTime, 0.5), (TrickSpd, 3.0)]),
        Part::new(Slot::Trinket, "Starter Keys", &[(BoostPads, 10.0), (T1, 0.8), (UltStart, 15.0)]),
        Part::new(Slot::Trinket, "Toxic Tag", &[(DriftRate, -8.0), (T3, 1.5), (MaxCoinsSpd, 0.2), (DriftSteer, -1.0), (Steer, -1.0), (Speed, 0.2), (SlowAreaPenalty, -30.0), (UltCharge, 4.0)]),
        Part::new(Slot::Trinket, "Tourney Tag", &[(StartBoost, 15.0), (CoinBoostTime, 1.8), (Speed, 0.2), (UltStart, 15.0), (TrickSpd, 2.0)]),
        Part::new(Slot::Trinket, "Water Rider", &[(BoostPads, 5.0), (DriftSteer, 1.0), (Steer, 1.0), (SlowAreaPenalty, 80.0), (Daze, -10.0), (UltCharge, -20.0), (SlipStreamSpd, 6.5), (SlipTime, 1.5), (TrickSpd, 2.5)]),
    ]);

    parts
}
