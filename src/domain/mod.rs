// Domain layer: conversion records and ports. No dependencies beyond std/serde/chrono.

pub mod model;
pub mod ports;
