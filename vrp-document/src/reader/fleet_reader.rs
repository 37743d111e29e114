#[cfg(test)]
#[path = "../../tests/unit/reader/fleet_reader_test.rs"]
mod fleet_reader_test;

use super::*;
use std::sync::Arc;
use vrp_core::models::problem::{PENALTY_TYPE_SUFFIX, Vehicle, VehicleBuilder, VehicleType, VehicleTypeBuilder};

const PENALTY_TAG: &str = "penalty";

/// Reads vehicle types first, then vehicles which refer to them.
pub(super) fn read_vehicles_and_their_types<N: DocumentNode>(
    root: &N,
    context: &mut ReadContext,
    problem: &mut ProblemBuilder,
) -> ReadResult<()> {
    for type_node in root.nodes_at("vehicleTypes.type") {
        let vehicle_type = read_vehicle_type(&type_node)?;
        context.vehicle_types.insert(&vehicle_type.registry_id(), Arc::new(vehicle_type))?;
    }

    for vehicle_node in root.nodes_at("vehicles.vehicle") {
        let vehicle = Arc::new(read_vehicle(&vehicle_node, context)?);
        context.vehicles.insert(&vehicle.id, vehicle.clone())?;
        problem.add_vehicle(vehicle);
    }

    debug!(types = context.vehicle_types.len(), vehicles = context.vehicles.len(), "read vehicles and their types");

    Ok(())
}

fn read_vehicle_type<N: DocumentNode>(node: &N) -> ReadResult<VehicleType> {
    const SECTION: &str = "vehicleTypes.type";

    let id = require_string(node, SECTION, "id")?;
    let builder = VehicleTypeBuilder::new(&id);

    let builder = match read_capacity(node, SECTION, "capacity", "vehicle type", &id)? {
        CapacitySpec::Scalar(value) => builder.capacity(value),
        CapacitySpec::Dimensions(dimensions) => dimensions
            .into_iter()
            .try_fold(builder, |builder, (index, value)| builder.add_capacity_dimension(index, value))?,
    };

    let builder = match node.get_f64("costs.fixed")? {
        Some(cost) => builder.fixed_cost(cost),
        None => builder,
    };
    let builder = match node.get_f64("costs.time")? {
        Some(cost) => builder.cost_per_time(cost),
        None => builder,
    };
    let builder = match node.get_f64("costs.distance")? {
        Some(cost) => builder.cost_per_distance(cost),
        None => builder,
    };

    let vehicle_type = builder.build()?;

    if node.get_string("[@type]").as_deref() == Some(PENALTY_TAG) {
        let factor = node.get_f64("[@penaltyFactor]")?;
        Ok(VehicleType::new_penalty(&vehicle_type, factor))
    } else {
        Ok(vehicle_type)
    }
}

fn read_vehicle<N: DocumentNode>(node: &N, context: &mut ReadContext) -> ReadResult<Vehicle> {
    const SECTION: &str = "vehicles.vehicle";

    let id = require_string(node, SECTION, "id")?;
    let type_id = require_string(node, SECTION, "typeId")?;
    let type_id = if node.get_string("[@type]").as_deref() == Some(PENALTY_TAG) {
        format!("{type_id}{PENALTY_TYPE_SUFFIX}")
    } else {
        type_id
    };

    let vehicle_type = context.vehicle_types.resolve(&type_id)?;

    let start_id = node
        .get_string("location.id")
        .or_else(|| node.get_string("startLocation.id"))
        .ok_or_else(|| ReadError::missing(&join(SECTION, "location.id")))?;

    let builder = VehicleBuilder::new(&id).vehicle_type(vehicle_type).start_location_id(&start_id);

    let start_coord = match read_coord(node, "location.")? {
        Some(coord) => Some(coord),
        None => read_coord(node, "startLocation.")?,
    };

    let builder = match start_coord {
        Some(coord) => builder.start_coord(coord),
        None => {
            let block = if node.has("location") { "location" } else { "startLocation" };
            context.warn_missing_coord(&id, &format!("{block}.coord"));
            builder
        }
    };

    let builder = match node.get_string("endLocation.id") {
        Some(end_id) => builder.end_location_id(&end_id),
        None => builder,
    };
    let builder = match read_coord(node, "endLocation.")? {
        Some(coord) => builder.end_coord(coord),
        None => {
            if node.has("endLocation") {
                context.warn_missing_coord(&id, "endLocation.coord");
            }
            builder
        }
    };

    let builder = match node.get_f64("timeSchedule.start")? {
        Some(start) => builder.earliest_start(start),
        None => builder,
    };
    let builder = match node.get_f64("timeSchedule.end")? {
        Some(end) => builder.latest_arrival(end),
        None => builder,
    };
    let builder = match node.get_bool("returnToDepot")? {
        Some(value) => builder.return_to_depot(value),
        None => builder,
    };

    Ok(builder.build()?)
}
